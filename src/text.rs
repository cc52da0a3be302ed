use std::fs;
use std::path::Path;

use crate::error::{ReadError, Result};

/// Every line of the file, trimmed. Blank lines are kept as empty strings.
///
/// `\n`, `\r\n` and a bare `\r` all end a line.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| ReadError::io(path, e))?;
    Ok(split_lines(&contents)
        .into_iter()
        .map(|line| line.trim().to_owned())
        .collect())
}

/// A terminator at the very end does not open another line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_ending_splits() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), ["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\r\nb\n"), ["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }
}
