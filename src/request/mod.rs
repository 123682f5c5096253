//! Curl text to wire request
//!
//! [`convert`] runs the whole pipeline for one input: parse the curl
//! command, decompose its URL, assemble the request and resolve where it
//! goes. It is a pure function of its input and safe to call from any
//! number of threads at once.

mod builder;
mod target;

pub use builder::{
    assemble, build_request, decompose_url, host_header_value, path_and_query,
    split_path_and_query, HttpRequestDescriptor,
};
pub use target::Target;

use serde::Serialize;
use tracing::{debug, info};

use crate::curl::{parse_curl_command, ParsedRequest};
use crate::errors::ConversionError;
use crate::strings::preview;

/// Path characters kept in a display label
pub const LABEL_MAX_CHARS: usize = 20;

/// Body characters echoed into the log
pub const BODY_PREVIEW_CHARS: usize = 50;

/// Everything a delivery tool needs for one converted command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Scheme-qualified URL the request was built from
    pub url: String,
    pub target: Target,
    pub request: HttpRequestDescriptor,
    /// Short tab name derived from the URL path
    pub label: String,
}

/// Short human-readable name for a request: its URL path as written, cut
/// to 20 chars
pub fn display_label(url: &str) -> String {
    match split_path_and_query(url).0 {
        "" => "/".to_string(),
        path => preview(path, LABEL_MAX_CHARS),
    }
}

/// Convert curl text into a wire-ready request and its target
pub fn convert(text: &str) -> Result<Conversion, ConversionError> {
    let parsed = parse_curl_command(text)?;
    let url = decompose_url(&parsed.url)?;
    let request = build_request(&parsed, &url);
    let target = Target::resolve(&url)?;
    let label = display_label(&parsed.url);

    log_summary(&parsed, &target);

    Ok(Conversion {
        url: parsed.url,
        target,
        request,
        label,
    })
}

fn log_summary(parsed: &ParsedRequest, target: &Target) {
    let body = parsed
        .body
        .as_deref()
        .map(|body| preview(body, BODY_PREVIEW_CHARS))
        .unwrap_or_else(|| "None".to_string());

    info!(
        url = %parsed.url,
        method = %parsed.method,
        headers = parsed.headers.len(),
        body = %body,
        "Converted curl command"
    );
    debug!(
        authority = %target.authority(),
        tls = target.use_tls,
        "Resolved connection target"
    );
}
