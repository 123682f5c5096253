//! Method and scheme facts the assembler relies on

/// Method used when a command names none
pub const GET: &str = "GET";

/// Methods recognised without a "non-standard" note in the log
pub const STANDARD_METHODS: &[&str] = &[
    GET, "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS", "TRACE", "CONNECT",
];

/// Check if a token is one of the standard HTTP methods (exact, uppercase)
pub fn is_standard(method: &str) -> bool {
    STANDARD_METHODS.contains(&method)
}

/// Default port for a URL scheme, if it is one we can talk to
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}
