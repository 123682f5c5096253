//! Where finished requests go
//!
//! Network delivery is someone else's job. Sinks hand each conversion to
//! the next tool in line; the shipped ones print it.

use std::io::Write;
use std::sync::Mutex;

use crate::errors::{CommanderError, Result};
use crate::request::Conversion;

/// Receives converted requests
///
/// Called from worker threads, so implementations must be shareable.
pub trait RequestSink: Send + Sync {
    fn deliver(&self, conversion: &Conversion) -> Result<()>;
}

fn lock<W>(out: &Mutex<W>) -> Result<std::sync::MutexGuard<'_, W>> {
    out.lock()
        .map_err(|_| CommanderError::Pool("sink output lock poisoned".to_string()))
}

/// Writes each request as raw HTTP/1.1, preceded by a `#` comment naming
/// its label and target
pub struct WireSink<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> WireSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> RequestSink for WireSink<W> {
    fn deliver(&self, conversion: &Conversion) -> Result<()> {
        let target = &conversion.target;
        let mut out = lock(&self.out)?;
        writeln!(
            out,
            "# {} -> {} ({})",
            conversion.label,
            target.authority(),
            if target.use_tls { "tls" } else { "plain" }
        )?;
        out.write_all(&conversion.request.to_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

/// Writes one JSON object per request (JSON Lines)
pub struct JsonSink<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> RequestSink for JsonSink<W> {
    fn deliver(&self, conversion: &Conversion) -> Result<()> {
        let line = serde_json::to_string(conversion)?;
        let mut out = lock(&self.out)?;
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
