//! Request assembly
//!
//! Builds the HTTP/1.1 request line and header block from a parsed curl
//! command.

use serde::{Serialize, Serializer};
use url::Url;

use crate::curl::ParsedRequest;
use crate::errors::ConversionError;
use crate::http::{CRLF, HTTP_VERSION};

/// A request ready for the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpRequestDescriptor {
    /// `METHOD path[?query] HTTP/1.1`
    pub request_line: String,
    /// `Name: Value` lines, Host first
    pub headers: Vec<String>,
    #[serde(serialize_with = "serialize_body")]
    pub body: Option<Vec<u8>>,
}

fn serialize_body<S: Serializer>(body: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    match body {
        Some(bytes) => serializer.serialize_some(&String::from_utf8_lossy(bytes)),
        None => serializer.serialize_none(),
    }
}

impl HttpRequestDescriptor {
    /// Value of the synthesized Host line
    pub fn host(&self) -> Option<&str> {
        self.header("Host")
    }

    /// First header value with this name (ASCII case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim_start())
        })
    }

    /// Render HTTP/1.1 framing: request line, headers, blank line, body
    ///
    /// A body without a user-supplied Content-Length gets one here so the
    /// message is self-delimiting. `headers` itself is left as assembled.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = String::with_capacity(128);
        head.push_str(&self.request_line);
        head.push_str(CRLF);
        for line in &self.headers {
            head.push_str(line);
            head.push_str(CRLF);
        }
        if let Some(body) = &self.body {
            if self.header("Content-Length").is_none() {
                head.push_str(&format!("Content-Length: {}{CRLF}", body.len()));
            }
        }
        head.push_str(CRLF);

        let mut out = head.into_bytes();
        if let Some(body) = &self.body {
            out.extend_from_slice(body);
        }
        out
    }
}

/// Decompose a scheme-qualified URL
///
/// Anything the `url` crate rejects, a URL without a host, or port 0 is a
/// [`ConversionError::MalformedUrl`].
pub fn decompose_url(url: &str) -> Result<Url, ConversionError> {
    let parsed = Url::parse(url).map_err(|e| ConversionError::malformed_url(url, e))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ConversionError::malformed_url(url, "URL has no host"));
    }
    if parsed.port() == Some(0) {
        return Err(ConversionError::malformed_url(url, "port 0 is not a valid port"));
    }
    Ok(parsed)
}

/// Path and query exactly as written in `url`
///
/// `Url` resolves dot segments and percent-encodes characters like `{`, so
/// the request target is sliced from the raw text instead: everything
/// after the authority, up to any fragment, split at the first `?`.
pub fn split_path_and_query(url: &str) -> (&str, Option<&str>) {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.split('#').next().unwrap_or_default();
    let start = rest.find(|c: char| c == '/' || c == '?').unwrap_or(rest.len());
    let target = &rest[start..];
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// `path[?query]` for the request line
pub fn path_and_query(url: &str) -> String {
    let (path, query) = split_path_and_query(url);
    let mut target = match path {
        "" => "/".to_string(),
        path => path.to_string(),
    };
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    target
}

/// Host header value: the port is only spelled out when it is not the
/// scheme default
pub fn host_header_value(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    // `Url::port` is already `None` for a scheme's default port.
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Assemble the wire request for an already decomposed URL
///
/// `url` supplies the Host line; the request target comes from
/// `parsed.url` untouched.
pub fn build_request(parsed: &ParsedRequest, url: &Url) -> HttpRequestDescriptor {
    let request_line = format!(
        "{} {} {HTTP_VERSION}",
        parsed.method,
        path_and_query(&parsed.url)
    );

    let mut headers = Vec::with_capacity(parsed.headers.len() + 1);
    headers.push(format!("Host: {}", host_header_value(url)));
    headers.extend(
        parsed
            .headers
            .iter()
            .map(|(name, value)| format!("{name}: {value}")),
    );

    HttpRequestDescriptor {
        request_line,
        headers,
        body: parsed.body.as_ref().map(|body| body.as_bytes().to_vec()),
    }
}

/// Decompose the parsed URL and assemble the wire request
pub fn assemble(parsed: &ParsedRequest) -> Result<HttpRequestDescriptor, ConversionError> {
    let url = decompose_url(&parsed.url)?;
    Ok(build_request(parsed, &url))
}
