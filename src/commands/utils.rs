//! Shared helpers for commands

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a source file as UTF-8, with the path in the error message
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Look up a 1-based line for display; out-of-range lines come back empty
pub fn line_text(content: &str, line: usize) -> &str {
    if line == 0 {
        return "";
    }
    content
        .lines()
        .nth(line - 1)
        .map(str::trim_end)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text() {
        let content = "first\nsecond  \nthird";
        assert_eq!(line_text(content, 1), "first");
        assert_eq!(line_text(content, 2), "second");
        assert_eq!(line_text(content, 3), "third");
    }

    #[test]
    fn test_line_text_out_of_range() {
        assert_eq!(line_text("only", 0), "");
        assert_eq!(line_text("only", 2), "");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/file.tsx")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/file.tsx"));
    }
}
