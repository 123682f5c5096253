//! Request body extraction
//!
//! JSON object payloads are preferred over anything else so that a
//! `-d '{...}'` is taken whole even when other data flags are present.
//! All patterns let `.` cross newlines; pasted JSON is often pretty-printed.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Body patterns in priority order, each with a short name for tracing
static BODY_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("data-json-single", r"(?s)(?:--data|-d)\s+'(\{.+?\})'"),
        ("data-json-double", r#"(?s)(?:--data|-d)\s+"(\{.+?\})""#),
        ("data-raw-json-single", r"(?s)--data-raw\s+'(\{.+?\})'"),
        ("data-raw-json-double", r#"(?s)--data-raw\s+"(\{.+?\})""#),
        ("data-single", r"(?s)(?:--data|-d)\s+'(.+?)'"),
        ("data-double", r#"(?s)(?:--data|-d)\s+"(.+?)""#),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("Invalid body regex")))
    .collect()
});

/// The single textual payload of the command, if any
pub fn extract_body(command: &str) -> Option<String> {
    BODY_PATTERNS.iter().find_map(|(name, re)| {
        let body = re.captures(command)?.get(1)?.as_str();
        trace!(pattern = *name, "Body matched");
        Some(body.to_string())
    })
}
