//! Connection target resolution

use serde::Serialize;
use url::Url;

use crate::errors::ConversionError;
use crate::http;

/// Where the request has to be sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
}

impl Target {
    /// Derive host, port and TLS flag from a decomposed URL
    ///
    /// Without an explicit port the scheme default applies (443 for https,
    /// 80 otherwise).
    pub fn resolve(url: &Url) -> Result<Self, ConversionError> {
        let host = url
            .host_str()
            .ok_or_else(|| ConversionError::malformed_url(url.as_str(), "URL has no host"))?;
        let use_tls = url.scheme() == "https";
        let fallback = if use_tls { 443 } else { 80 };
        let port = url
            .port()
            .or_else(|| http::default_port(url.scheme()))
            .unwrap_or(fallback);

        Ok(Self {
            host: host.to_string(),
            port,
            use_tls,
        })
    }

    /// `host:port`, as used in log lines
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(url: &str) -> Target {
        Target::resolve(&Url::parse(url).unwrap()).unwrap()
    }

    #[test]
    fn test_https_default_port() {
        assert_eq!(
            resolve("https://api.example.com/v1"),
            Target {
                host: "api.example.com".to_string(),
                port: 443,
                use_tls: true
            }
        );
    }

    #[test]
    fn test_http_default_port() {
        let target = resolve("http://example.com");
        assert_eq!(target.port, 80);
        assert!(!target.use_tls);
    }

    #[test]
    fn test_explicit_port() {
        assert_eq!(resolve("https://example.com:8443/path").port, 8443);
        assert_eq!(resolve("http://example.com:443/").port, 443);
        assert_eq!(resolve("https://example.com:443/").port, 443);
    }

    #[test]
    fn test_authority() {
        assert_eq!(resolve("http://localhost:3000").authority(), "localhost:3000");
    }

    #[test]
    fn test_missing_host() {
        let url = Url::parse("data:text/plain,hi").unwrap();
        assert!(matches!(
            Target::resolve(&url),
            Err(ConversionError::MalformedUrl { .. })
        ));
    }
}
