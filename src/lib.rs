//! Compound anagrams: every way to spell a word with a combination of
//! dictionary words that together use exactly its letters.
//!
//! ```
//! use compound_anagrams::dictionary::{Dictionary, LoadOptions, WordStore};
//! use compound_anagrams::filter::filter;
//! use compound_anagrams::letters::LetterMultiset;
//! use compound_anagrams::search::search;
//!
//! let store = WordStore::from_words(["lo", "hel", "fjas", "leloh", "olleh"], &LoadOptions::default())?;
//! let target = LetterMultiset::from_word("hello")?;
//! let dict = filter(&Dictionary::new(&store), &target);
//! let solutions = search(&target, &dict);
//! assert_eq!(solutions.words(&dict), vec![vec!["leloh"], vec!["olleh"], vec!["hel", "lo"]]);
//! # Ok::<(), compound_anagrams::errors::AnagramError>(())
//! ```

pub mod dictionary;
pub mod errors;
pub mod filter;
pub mod letters;
pub mod logging;
pub mod render;
pub mod search;
pub mod source;
