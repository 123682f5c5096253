//! curl-commander library interface
//!
//! Converts pasted curl commands into wire-ready HTTP/1.1 requests.
//!
//! # Module Organization
//!
//! - [`curl`] - Curl text parsing (normalize, URL/method/header/body extraction)
//! - [`request`] - Request assembly, target resolution, the [`convert`] pipeline
//! - [`host`] - Worker pool, sources and sinks for embedding hosts
//! - [`errors`] - Error types (ConversionError, CommanderError, Result)
//! - [`core`] - CLI execution

pub mod cli;
pub mod config;
pub mod core;
pub mod curl;
pub mod errors;
pub mod host;
pub mod http;
pub mod logging;
pub mod request;
pub mod status;
pub mod strings;

pub use curl::{parse_curl_command, ParsedRequest};
pub use errors::{CommanderError, ConversionError};
pub use request::{convert, Conversion, HttpRequestDescriptor, Target};
