//! Host adapter
//!
//! The pipeline itself is synchronous and stateless. [`Commander`] is the
//! piece a host embeds: it owns a small worker pool so conversions never
//! block the caller's thread, and it hands each finished request to an
//! injected [`RequestSink`].
//!
//! # Lifecycle
//!
//! ```no_run
//! use std::sync::Arc;
//! use curl_commander::host::{Commander, WireSink};
//!
//! let mut commander = Commander::new(Arc::new(WireSink::new(std::io::stdout())), 2);
//! commander.start()?;
//! let job = commander.submit("curl https://example.com/".to_string())?;
//! let conversion = commander.wait(job)?;
//! println!("{}", conversion.label);
//! commander.stop();
//! # Ok::<(), curl_commander::errors::CommanderError>(())
//! ```

mod sink;
mod source;

pub use sink::{JsonSink, RequestSink, WireSink};
pub use source::{FileSource, LiteralSource, StdinSource, TextSource};

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::errors::{CommanderError, ConversionError, Result};
use crate::request::{convert, Conversion};

/// Pool size used when nothing else is configured
pub const DEFAULT_WORKERS: usize = 2;

/// How long `stop()` waits for in-flight conversions
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Tracing target for detailed failure reports
pub const DIAGNOSTICS_TARGET: &str = "diagnostics";

/// A submitted conversion
pub type Job = JoinHandle<Result<Conversion>>;

/// Runs conversions on a bounded worker pool and delivers the results
pub struct Commander {
    sink: Arc<dyn RequestSink>,
    workers: usize,
    runtime: Option<Runtime>,
}

impl Commander {
    /// Create a stopped commander; `workers` is clamped to at least 1
    pub fn new(sink: Arc<dyn RequestSink>, workers: usize) -> Self {
        Self {
            sink,
            workers: workers.max(1),
            runtime: None,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn is_running(&self) -> bool {
        self.runtime.is_some()
    }

    /// Spin up the worker pool. Starting a running commander is a no-op.
    pub fn start(&mut self) -> Result<()> {
        if self.runtime.is_some() {
            return Ok(());
        }

        let runtime = Builder::new_multi_thread()
            .worker_threads(self.workers)
            .max_blocking_threads(self.workers)
            .thread_name("curl-commander-worker")
            .build()
            .map_err(|e| CommanderError::Pool(format!("failed to start worker pool: {e}")))?;

        info!(workers = self.workers, "Commander started");
        self.runtime = Some(runtime);
        Ok(())
    }

    /// Shut the worker pool down. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            info!("Shutting down worker pool");
            runtime.shutdown_timeout(SHUTDOWN_GRACE);
        }
    }

    /// Queue one curl text for conversion and delivery
    pub fn submit(&self, text: String) -> Result<Job> {
        let runtime = self.runtime.as_ref().ok_or(CommanderError::NotRunning)?;
        let sink = Arc::clone(&self.sink);
        Ok(runtime.spawn_blocking(move || process(&text, sink.as_ref())))
    }

    /// Read a source and queue its text
    ///
    /// An empty source is still submitted so it fails the same way an empty
    /// clipboard would.
    pub fn submit_from(&self, source: &dyn TextSource) -> Result<Job> {
        let text = source.read_text()?.unwrap_or_default();
        self.submit(text)
    }

    /// Block until a submitted conversion finishes
    pub fn wait(&self, job: Job) -> Result<Conversion> {
        let runtime = self.runtime.as_ref().ok_or(CommanderError::NotRunning)?;
        match runtime.block_on(job) {
            Ok(result) => result,
            Err(join_error) => {
                error!(target: DIAGNOSTICS_TARGET, error = ?join_error, "Conversion worker failed");
                Err(ConversionError::UnexpectedFailure(join_error.to_string()).into())
            }
        }
    }

    /// Convert a batch concurrently; results come back in input order
    pub fn convert_all<I>(&self, texts: I) -> Result<Vec<Result<Conversion>>>
    where
        I: IntoIterator<Item = String>,
    {
        let jobs = texts
            .into_iter()
            .map(|text| self.submit(text))
            .collect::<Result<Vec<_>>>()?;
        Ok(jobs.into_iter().map(|job| self.wait(job)).collect())
    }
}

impl Drop for Commander {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Convert one text and hand it to the sink
fn process(text: &str, sink: &dyn RequestSink) -> Result<Conversion> {
    if text.trim().is_empty() {
        warn!("No text to convert");
    }

    let conversion = convert(text).map_err(|err| {
        report_failure(&err);
        CommanderError::from(err)
    })?;

    if let Err(err) = sink.deliver(&conversion) {
        error!(target: DIAGNOSTICS_TARGET, error = ?err, label = %conversion.label, "Delivery failed");
        return Err(err);
    }

    info!(
        label = %conversion.label,
        host = %conversion.target.host,
        port = conversion.target.port,
        "Delivered request"
    );
    Ok(conversion)
}

fn report_failure(err: &ConversionError) {
    debug!(kind = err.kind(), reason = %err, "Conversion failed");
    if matches!(err, ConversionError::UnexpectedFailure(_)) {
        error!(target: DIAGNOSTICS_TARGET, error = ?err, "Unexpected conversion failure");
    }
}
