//! Error types for curl-commander

use thiserror::Error;

/// Why a single curl text could not be turned into a request.
///
/// Every variant renders as a one-line reason suitable for the host's
/// status output. The `Debug` form is what goes to the diagnostics log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Not a curl command")]
    NotCurlCommand,

    #[error("Couldn't find URL in curl command")]
    NoUrlFound,

    #[error("Invalid URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("Failed to parse curl command: {0}")]
    UnexpectedFailure(String),
}

impl ConversionError {
    pub(crate) fn malformed_url(url: &str, reason: impl ToString) -> Self {
        ConversionError::MalformedUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::NotCurlCommand => "not_curl_command",
            ConversionError::NoUrlFound => "no_url_found",
            ConversionError::MalformedUrl { .. } => "malformed_url",
            ConversionError::UnexpectedFailure(_) => "unexpected_failure",
        }
    }
}

/// Main error type for curl-commander
#[derive(Error, Debug)]
pub enum CommanderError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Worker pool error: {0}")]
    Pool(String),

    #[error("Commander is not running")]
    NotRunning,
}

pub type Result<T> = std::result::Result<T, CommanderError>;
