//! Request method extraction

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::http;

static METHOD_FLAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:--request|-X)\s+['"]?([A-Z]+)['"]?"#).expect("Invalid method regex")
});

/// Method named by the first `-X` / `--request` flag, or GET
///
/// Only uppercase tokens count; `-X post` is ignored the same way curl
/// users never write it.
pub fn extract_method(command: &str) -> String {
    let Some(method) = METHOD_FLAG_RE
        .captures(command)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return http::GET.to_string();
    };

    if !http::is_standard(method) {
        debug!(method, "Non-standard HTTP method");
    }
    method.to_string()
}
