//! Target URL extraction
//!
//! There is no single grammar for "where is the URL" in a pasted curl
//! command, so a short cascade of matchers is tried in a fixed order and the
//! first hit wins.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::errors::ConversionError;

/// Scheme put in front of URLs that were pasted without one
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

// A URL-looking token, optionally quoted. Tokens never start with `-` so a
// flag is not mistaken for the URL.
macro_rules! url_token {
    () => {
        r#"['"]?(https?://[^'"\s]+|[^'"\s-][^'"\s]*)['"]?"#
    };
}

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(r"curl\s+(?:--location|-L)\s+", url_token!()))
        .expect("Invalid location URL regex")
});

static EXPLICIT_METHOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"curl\s+(?:-X|--request)\s+['"]?[A-Z]+['"]?\s+"#,
        url_token!()
    ))
    .expect("Invalid explicit method URL regex")
});

static BARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(r"curl\s+", url_token!())).expect("Invalid bare URL regex")
});

static ANYWHERE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^'"\s]+|[^'"\s]+\.[^'"\s]+/[^'"\s]*"#)
        .expect("Invalid fallback URL regex")
});

/// One matcher in the URL cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlStrategy {
    /// `curl --location URL` / `curl -L URL`
    Location,
    /// `curl -X METHOD URL` / `curl --request METHOD URL`
    ExplicitMethod,
    /// `curl URL`
    Bare,
    /// Any http(s) URL, or any `host.tld/path` token, anywhere in the text
    Anywhere,
}

impl UrlStrategy {
    /// Matchers in priority order
    pub const CASCADE: [UrlStrategy; 4] = [
        UrlStrategy::Location,
        UrlStrategy::ExplicitMethod,
        UrlStrategy::Bare,
        UrlStrategy::Anywhere,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            UrlStrategy::Location => &LOCATION_RE,
            UrlStrategy::ExplicitMethod => &EXPLICIT_METHOD_RE,
            UrlStrategy::Bare => &BARE_RE,
            UrlStrategy::Anywhere => &ANYWHERE_RE,
        }
    }

    /// Capture group holding the URL token
    fn group(self) -> usize {
        match self {
            UrlStrategy::Anywhere => 0,
            _ => 1,
        }
    }

    /// Run this matcher against the command
    ///
    /// `None` means "no match, try the next one". A match whose URL group is
    /// missing is reported as an unexpected failure rather than skipped.
    pub fn find(self, command: &str) -> Option<Result<&str, ConversionError>> {
        let caps = self.regex().captures(command)?;
        let token = caps.get(self.group()).map(|m| m.as_str()).ok_or_else(|| {
            ConversionError::UnexpectedFailure(format!(
                "{self:?} URL pattern matched without a URL group"
            ))
        });
        Some(token)
    }
}

/// Find the request URL in a normalized curl command
///
/// The result always carries an `http://` or `https://` scheme; bare hosts
/// get `https://`.
pub fn extract_url(command: &str) -> Result<String, ConversionError> {
    let (strategy, token) = UrlStrategy::CASCADE
        .iter()
        .find_map(|strategy| strategy.find(command).map(|found| (*strategy, found)))
        .ok_or(ConversionError::NoUrlFound)?;
    let token = token?;
    debug!(?strategy, token, "URL matched");

    let url = clean_url_token(token);
    if url.is_empty() {
        return Err(ConversionError::NoUrlFound);
    }
    Ok(with_default_scheme(url))
}

/// Strip quotes and anything swallowed after the first space
fn clean_url_token(token: &str) -> &str {
    let url = token.trim_matches(|c| c == '\'' || c == '"');
    match url.split_once(' ') {
        Some((head, _)) => head,
        None => url,
    }
}

fn with_default_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    let url = format!("{DEFAULT_SCHEME_PREFIX}{url}");
    info!(url = %url, "Added https:// to URL");
    url
}
