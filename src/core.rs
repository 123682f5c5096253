//! Main execution logic
//!
//! Parses arguments, loads config, sets up logging, then feeds every input
//! through a [`Commander`] and reports per-input failures on stderr.

use std::ffi::OsString;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::debug;

use crate::cli::{Args, OutputFormat};
use crate::config::Config;
use crate::host::{
    Commander, FileSource, JsonSink, LiteralSource, RequestSink, StdinSource, TextSource, WireSink,
    DEFAULT_WORKERS,
};
use crate::logging;
use crate::status::ExitStatus;

/// Run the CLI with the given arguments (program name first)
pub fn run<I, T>(args: I) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitStatus::Error
            } else {
                ExitStatus::Success
            };
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("curl-commander: {err}");
            return ExitStatus::Error;
        }
    };

    logging::init(
        args.log_format.or(config.log_format).unwrap_or_default(),
        args.verbose,
        args.quiet,
    );
    debug!(config_file = %config.config_file().display(), "Configuration loaded");

    match execute(&args, &config) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("curl-commander: {err:#}");
            ExitStatus::Error
        }
    }
}

fn execute(args: &Args, config: &Config) -> anyhow::Result<ExitStatus> {
    let sources = collect_sources(args)?;
    let format = args.format.or(config.format).unwrap_or_default();
    let workers = args
        .workers
        .map(usize::from)
        .or(config.workers)
        .unwrap_or(DEFAULT_WORKERS);

    let sink: Arc<dyn RequestSink> = match format {
        OutputFormat::Wire => Arc::new(WireSink::new(std::io::stdout())),
        OutputFormat::Json => Arc::new(JsonSink::new(std::io::stdout())),
    };

    let mut commander = Commander::new(sink, workers);
    commander.start().context("cannot start conversion workers")?;

    let jobs: Vec<_> = sources
        .iter()
        .map(|source| commander.submit_from(source.as_ref()))
        .collect();

    let mut failures = 0;
    for (source, job) in sources.iter().zip(jobs) {
        if let Err(err) = job.and_then(|job| commander.wait(job)) {
            failures += 1;
            eprintln!("Error ({}): {}", source.describe(), err);
        }
    }

    commander.stop();
    Ok(ExitStatus::from_failures(failures))
}

/// Arguments first, then files; stdin only when neither is given
fn collect_sources(args: &Args) -> anyhow::Result<Vec<Box<dyn TextSource>>> {
    let mut sources: Vec<Box<dyn TextSource>> = Vec::new();
    for (index, command) in args.commands.iter().enumerate() {
        sources.push(Box::new(LiteralSource::new(command.clone(), index)));
    }
    for path in &args.files {
        sources.push(Box::new(FileSource::new(path)));
    }

    if sources.is_empty() {
        if atty::is(atty::Stream::Stdin) {
            bail!("no curl command given; pass one as an argument, with --file, or on stdin");
        }
        sources.push(Box::new(StdinSource));
    }
    Ok(sources)
}
