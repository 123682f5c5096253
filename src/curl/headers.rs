//! Header extraction

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_FLAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:--header|-H)\s+['"]([^:]+):\s*([^'"]+)['"]"#).expect("Invalid header regex")
});

/// Header name to value, in order of first appearance
pub type HeaderMap = IndexMap<String, String>;

/// Collect every quoted `-H 'Name: value'` flag
///
/// Names are compared case-sensitively. A repeated name replaces the
/// earlier value but keeps the earlier position.
pub fn extract_headers(command: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for caps in HEADER_FLAG_RE.captures_iter(command) {
        let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        headers.insert(name.as_str().to_string(), value.as_str().to_string());
    }
    headers
}
