//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Convert copied curl commands into wire-ready HTTP/1.1 requests
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "curl-commander",
    version,
    about = "Convert copied curl commands into wire-ready HTTP/1.1 requests",
    after_help = "With no COMMAND and no --file, one command is read from stdin."
)]
pub struct Args {
    /// curl command text; each argument is converted on its own
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Read a curl command from a file (repeatable)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Output format for converted requests
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Number of conversion workers
    #[arg(long = "workers", value_name = "N", value_parser = clap::value_parser!(u16).range(1..=64))]
    pub workers: Option<u16>,

    /// Log output format
    #[arg(long = "log-format", value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// How converted requests are printed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw HTTP/1.1 request text (default)
    #[default]
    Wire,
    /// One JSON object per request
    Json,
}

/// Log output format
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
