// Loading OneTab text exports

use crate::encoding::{TextEncoding, decode_first};
use crate::error::{GroupError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// The usable lines of an export together with the encoding that decoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedExport {
    pub encoding: TextEncoding,
    pub lines: Vec<String>,
}

impl LoadedExport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Load an export, trying each of [`TextEncoding::CANDIDATES`] in order.
pub fn load_entries(path: &Path) -> Result<LoadedExport> {
    load_entries_with(path, &TextEncoding::CANDIDATES)
}

/// Load an export using an explicit list of candidate encodings.
///
/// The first encoding that decodes the *entire* file wins. Lines are trimmed
/// and blank lines dropped; file order is preserved.
pub fn load_entries_with(path: &Path, candidates: &[TextEncoding]) -> Result<LoadedExport> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GroupError::FileNotFound(path.to_path_buf()),
        _ => GroupError::OtherIo {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read export");

    let (encoding, text) =
        decode_first(&bytes, candidates).ok_or_else(|| GroupError::UndecodableFile {
            path: path.to_path_buf(),
            tried: candidates.to_vec(),
        })?;
    info!(path = %path.display(), %encoding, "decoded export");

    Ok(LoadedExport {
        encoding,
        lines: split_entries(&text),
    })
}

/// Trimmed, non-empty lines of `text`. `\r\n`, `\n` and a bare `\r` all end a line.
pub fn split_entries(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_entries_trims_and_drops_blank_lines() {
        let text = "  https://a.com | A  \r\n\n   \t\nhttps://b.com\n";
        assert_eq!(split_entries(text), vec!["https://a.com | A", "https://b.com"]);
    }

    #[test]
    fn split_entries_without_trailing_newline() {
        assert_eq!(split_entries("https://a.com"), vec!["https://a.com"]);
    }

    #[test]
    fn split_entries_on_bare_carriage_return() {
        assert_eq!(
            split_entries("https://a.com | A\rhttps://b.com | B\r"),
            vec!["https://a.com | A", "https://b.com | B"]
        );
        assert_eq!(split_entries("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_entries_empty() {
        assert!(split_entries("").is_empty());
        assert!(split_entries("\n\n  \n").is_empty());
    }
}
