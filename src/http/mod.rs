//! HTTP protocol constants
//!
//! Method names, default ports and the HTTP/1.1 framing bits shared by the
//! request assembler and the sinks.

mod method;

pub use method::*;

/// Protocol version written into every request line
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Line terminator for HTTP/1.1 framing
pub const CRLF: &str = "\r\n";
