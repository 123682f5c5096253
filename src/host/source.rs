//! Where curl text comes from
//!
//! The original clipboard reader is replaced by small sources the CLI can
//! point at: literal argument text, a file, or stdin.

use std::io::Read;
use std::path::PathBuf;

use crate::errors::Result;

/// Supplies the text of one curl command
pub trait TextSource: Send + Sync {
    /// Human-readable origin, used in error messages
    fn describe(&self) -> String;

    /// The text, or `None` when the source holds nothing usable
    fn read_text(&self) -> Result<Option<String>>;
}

/// Text given directly, e.g. a command-line argument
#[derive(Debug, Clone)]
pub struct LiteralSource {
    text: String,
    index: usize,
}

impl LiteralSource {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

impl TextSource for LiteralSource {
    fn describe(&self) -> String {
        format!("argument #{}", self.index + 1)
    }

    fn read_text(&self) -> Result<Option<String>> {
        Ok(non_empty(self.text.clone()))
    }
}

/// Text read from a file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<Option<String>> {
        let text = std::fs::read_to_string(&self.path)?;
        Ok(non_empty(text))
    }
}

/// Text piped in on stdin
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl TextSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    fn read_text(&self) -> Result<Option<String>> {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(non_empty(text))
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_literal_source() {
        let source = LiteralSource::new("curl x.io/a", 0);
        assert_eq!(source.describe(), "argument #1");
        assert_eq!(source.read_text().unwrap().as_deref(), Some("curl x.io/a"));
        assert_eq!(LiteralSource::new("  \n", 1).read_text().unwrap(), None);
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "curl \\\n  https://example.com/a").unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(
            source.read_text().unwrap().as_deref(),
            Some("curl \\\n  https://example.com/a")
        );
    }

    #[test]
    fn test_missing_file() {
        let source = FileSource::new("/definitely/not/here.curl");
        assert!(source.read_text().is_err());
    }
}
