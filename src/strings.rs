//! String utilities
//!
//! Previews for log lines and tab labels.

/// Marker appended to anything that was cut short
pub const ELLIPSIS: &str = "...";

/// Keep the first `max_chars` characters of `s`, adding "..." if anything was cut
///
/// Counts characters, not bytes, so multi-byte text never splits mid-character.
pub fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &s[..cut], ELLIPSIS),
        None => s.to_string(),
    }
}

/// Collapse runs of whitespace (including newlines) into single spaces
///
/// Used so multi-line input previews stay on one log line.
pub fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello world", 5), "hello...");
        assert_eq!(preview("hello", 5), "hello");
        assert_eq!(preview("", 3), "");
    }

    #[test]
    fn test_preview_utf8() {
        let s = "héllo wörld";
        assert_eq!(preview(s, 4), "héll...");
        assert_eq!(preview(s, 11), s);
    }

    #[test]
    fn test_squash_whitespace() {
        assert_eq!(squash_whitespace("curl \n  -X  POST\t"), "curl -X POST");
    }
}
