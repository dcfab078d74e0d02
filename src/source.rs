//! Reading the word list.
//!
//! The format is one word per line. Line terminators (`\n` or `\r\n`) and
//! surrounding whitespace are stripped and blank lines are skipped; nothing
//! else is normalized, so validation in [`WordStore`](crate::dictionary::WordStore)
//! still rejects uppercase letters or punctuation.

use crate::errors::AnagramError;
use std::path::Path;

/// Words of `contents` in file order.
pub fn parse_words(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Read the file at `path` and return its words in file order.
///
/// # Errors
///
/// Returns [`AnagramError::SourceUnavailable`] if the file cannot be read
/// (including when it is not valid UTF-8).
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AnagramError> {
    let path_ref = path.as_ref();
    let data = std::fs::read_to_string(path_ref).map_err(|source| {
        AnagramError::SourceUnavailable {
            path: path_ref.to_path_buf(),
            source,
        }
    })?;
    Ok(parse_words(&data).map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_words_skips_blank_lines() {
        let words: Vec<_> = parse_words("lo\n\nhel\r\n  fjas \n\n").collect();
        assert_eq!(words, vec!["lo", "hel", "fjas"]);
    }

    #[test]
    fn test_parse_words_keeps_order_and_duplicates() {
        let words: Vec<_> = parse_words("b\na\nb").collect();
        assert_eq!(words, vec!["b", "a", "b"]);
        assert_eq!(parse_words("").count(), 0);
    }

    #[test]
    fn test_load_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "leloh").unwrap();
        writeln!(file, "olleh").unwrap();
        write!(file, "lo").unwrap();
        let words = load_words(file.path()).unwrap();
        assert_eq!(words, vec!["leloh", "olleh", "lo"]);
    }

    #[test]
    fn test_load_words_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match load_words(&path) {
            Err(AnagramError::SourceUnavailable { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }
}
