//! Error types for loading words and building letter multisets.
//!
//! # Error Codes
//!
//! - A001: `InvalidInput` (word contains a character outside `a`-`z`)
//! - A002: `WordTooLong` (dictionary word longer than the supported maximum)
//! - A003: `EmptyWord` (dictionary word is empty)
//! - A004: `SourceUnavailable` (word list could not be read)
//!
//! Infeasible word choices during the search are not errors; they are
//! ordinary backtracking.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    #[error("word \"{word}\" contains invalid character '{invalid_char}' (only a-z allowed)")]
    InvalidInput { word: String, invalid_char: char },

    #[error("word \"{word}\" has {length} letters (maximum is {max})")]
    WordTooLong {
        word: String,
        length: usize,
        max: usize,
    },

    #[error("empty dictionary word")]
    EmptyWord,

    #[error("failed to read word list from '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnagramError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AnagramError::InvalidInput { .. } => "A001",
            AnagramError::WordTooLong { .. } => "A002",
            AnagramError::EmptyWord => "A003",
            AnagramError::SourceUnavailable { .. } => "A004",
        }
    }

    /// Returns a helpful suggestion for this error, if there is one
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            AnagramError::InvalidInput { .. } => Some("Only lowercase letters a-z are allowed"),
            AnagramError::WordTooLong { .. } => {
                Some("Remove the word from the list, or pass --skip-long-words to ignore it")
            }
            AnagramError::EmptyWord => Some("Dictionary words need at least one letter"),
            AnagramError::SourceUnavailable { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help_text) => format!("{self} ({})\n{help_text}", self.code()),
            None => format!("{self} ({})", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invalid_input_message() {
        let err = AnagramError::InvalidInput {
            word: "he11o".to_string(),
            invalid_char: '1',
        };
        assert_eq!(err.code(), "A001");
        let detailed = err.display_detailed();
        assert!(detailed.contains("he11o"));
        assert!(detailed.contains("'1'"));
        assert!(detailed.contains("A001"));
        assert!(detailed.contains("a-z"));
    }

    #[test]
    fn test_source_unavailable_has_path_and_no_help() {
        let err = AnagramError::SourceUnavailable {
            path: PathBuf::from("/no/such/words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.help().is_none());
        assert_eq!(err.display_detailed(), format!("{err} (A004)"));
        assert!(err.to_string().contains("/no/such/words.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let errors = [
            AnagramError::InvalidInput { word: "x1".to_string(), invalid_char: '1' },
            AnagramError::WordTooLong { word: "x".repeat(100), length: 100, max: 99 },
            AnagramError::EmptyWord,
            AnagramError::SourceUnavailable {
                path: PathBuf::from("x"),
                source: io::Error::new(io::ErrorKind::Other, "x"),
            },
        ];
        let codes: HashSet<_> = errors.iter().map(AnagramError::code).collect();
        assert_eq!(codes.len(), errors.len());
    }
}
