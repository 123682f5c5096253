//! cURL command parsing
//!
//! Turns pasted curl text into a [`ParsedRequest`]. Only the URL, method,
//! headers and a single textual body are understood; every other flag is
//! ignored.
//!
//! # Example
//!
//! ```
//! use curl_commander::curl::parse_curl_command;
//!
//! let parsed = parse_curl_command(
//!     "curl -X POST 'https://api.example.com/login' -H 'Content-Type: application/json' -d '{\"user\":\"a\"}'",
//! ).unwrap();
//! assert_eq!(parsed.method, "POST");
//! assert_eq!(parsed.url, "https://api.example.com/login");
//! assert_eq!(parsed.body.as_deref(), Some("{\"user\":\"a\"}"));
//! ```

mod body;
mod headers;
mod method;
mod normalize;
mod url_cascade;

pub use body::extract_body;
pub use headers::{extract_headers, HeaderMap};
pub use method::extract_method;
pub use normalize::{is_curl_invocation, normalize};
pub use url_cascade::{extract_url, UrlStrategy, DEFAULT_SCHEME_PREFIX};

use serde::Serialize;
use tracing::info;

use crate::errors::ConversionError;
use crate::strings::{preview, squash_whitespace};

/// How much of the input is echoed into the log
pub const INPUT_PREVIEW_CHARS: usize = 100;

/// What a curl command asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRequest {
    /// Uppercase method token, GET when the command names none
    pub method: String,
    /// Absolute http(s) URL
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// Parse a curl command into its request parts
///
/// Fails with [`ConversionError::NotCurlCommand`] before looking at anything
/// else when the text is not a curl invocation (empty text included).
pub fn parse_curl_command(text: &str) -> Result<ParsedRequest, ConversionError> {
    let command = normalize(text);
    if !is_curl_invocation(&command) {
        return Err(ConversionError::NotCurlCommand);
    }

    info!(
        input = %preview(&squash_whitespace(&command), INPUT_PREVIEW_CHARS),
        "Parsing curl command"
    );

    let url = extract_url(&command)?;
    let method = extract_method(&command);
    let headers = extract_headers(&command);
    let body = extract_body(&command);

    Ok(ParsedRequest {
        method,
        url,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_get() {
        let parsed = parse_curl_command("curl https://api.example.com/v1/users?id=5").unwrap();
        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.url, "https://api.example.com/v1/users?id=5");
        assert!(parsed.headers.is_empty());
        assert!(parsed.body.is_none());
    }

    #[test]
    fn test_post_with_json() {
        let parsed = parse_curl_command(
            r#"curl -X POST 'https://api.example.com/login' -H 'Content-Type: application/json' -d '{"user":"a","pass":"b"}'"#,
        )
        .unwrap();
        assert_eq!(parsed.method, "POST");
        assert_eq!(parsed.url, "https://api.example.com/login");
        assert_eq!(parsed.headers.len(), 1);
        assert_eq!(parsed.headers["Content-Type"], "application/json");
        assert_eq!(parsed.body.as_deref(), Some(r#"{"user":"a","pass":"b"}"#));
    }

    #[test]
    fn test_line_continuations_match_single_line() {
        let multi = "curl \\\n  -X POST \\\n  'https://api.example.com/login' \\\r\n  -H 'Accept: */*' \\\n  -d 'a=b'";
        let single = "curl -X POST 'https://api.example.com/login' -H 'Accept: */*' -d 'a=b'";
        assert_eq!(
            parse_curl_command(multi).unwrap(),
            parse_curl_command(single).unwrap()
        );
    }

    #[test]
    fn test_not_curl() {
        for text in ["not a curl command at all", "", "   ", "wget https://x.io", "curly x.io"] {
            assert_eq!(
                parse_curl_command(text).unwrap_err(),
                ConversionError::NotCurlCommand,
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_curl_alone_has_no_url() {
        assert_eq!(
            parse_curl_command("curl").unwrap_err(),
            ConversionError::NoUrlFound
        );
    }

    #[test]
    fn test_leading_whitespace_and_case() {
        let parsed = parse_curl_command("\n  Curl https://example.com/").unwrap();
        assert_eq!(parsed.url, "https://example.com/");
    }
}
