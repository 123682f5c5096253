//! Input normalization
//!
//! Copied commands usually arrive split over several lines with trailing
//! backslashes. Everything downstream works on one logical line.

/// Join shell line continuations into a single line
///
/// Only `\` + LF and `\` + CR LF are touched; every other character,
/// including bare newlines and quoted text, passes through unchanged.
pub fn normalize(raw: &str) -> String {
    raw.replace("\\\r\n", " ").replace("\\\n", " ")
}

/// Check that the text is a curl invocation
///
/// Leading whitespace is ignored and the `curl` token is matched
/// case-insensitively. The token must be followed by whitespace or end the
/// input, so `curlish` is rejected while a lone `curl` is accepted.
pub fn is_curl_invocation(command: &str) -> bool {
    let trimmed = command.trim_start();
    let Some(head) = trimmed.get(..4) else {
        return false;
    };
    if !head.eq_ignore_ascii_case("curl") {
        return false;
    }
    trimmed[4..].chars().next().map_or(true, char::is_whitespace)
}
