//! Tracing setup
//!
//! Logs go to stderr so stdout carries nothing but converted requests.
//! `RUST_LOG` overrides the verbosity picked from the command line.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogFormat;
use crate::host::DIAGNOSTICS_TARGET;

/// Filter directives for a verbosity level
pub fn default_directives(verbosity: u8, quiet: bool) -> String {
    let level = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    format!("warn,curl_commander={level},{DIAGNOSTICS_TARGET}=error")
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(format: LogFormat, verbosity: u8, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity, quiet)));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(atty::is(atty::Stream::Stderr))
                    .with_target(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    result.ok();
}
