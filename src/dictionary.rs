//! The word list, sorted longest first, and its length index.
//!
//! A [`WordStore`] owns the validated words in source order. A
//! [`Dictionary`] borrows a store and keeps only *indices* into it, sorted by
//! non-increasing word length, together with a [`LengthIndex`] that records
//! where each length group ends. Filtering produces another `Dictionary`
//! over the same store, so a filtered dictionary can never outlive the words
//! it refers to.

use crate::errors::AnagramError;
use crate::letters::Letter;
use indexmap::IndexMap;
use log::{debug, warn};
use std::cmp::Reverse;

/// Longest word the length index supports.
pub const MAX_WORD_LENGTH: usize = 99;

/// What to do with a dictionary word longer than [`MAX_WORD_LENGTH`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LongWordPolicy {
    /// Fail the whole load. A silently shortened dictionary would report
    /// "no solution" where one exists.
    #[default]
    Abort,
    /// Drop the word with a warning and keep loading.
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub long_words: LongWordPolicy,
}

/// Owns the backing storage of every dictionary word, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    /// Validate and take ownership of `words`.
    ///
    /// Every word must be non-empty and consist of `a`-`z` only. Textually
    /// identical words are kept as separate entries.
    pub fn from_words<I, S>(words: I, options: &LoadOptions) -> Result<WordStore, AnagramError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = WordStore::default();
        let mut skipped = 0usize;
        for word in words {
            let word: String = word.into();
            if word.is_empty() {
                return Err(AnagramError::EmptyWord);
            }
            let length = word.chars().count();
            if length > MAX_WORD_LENGTH {
                match options.long_words {
                    LongWordPolicy::Abort => {
                        return Err(AnagramError::WordTooLong {
                            word,
                            length,
                            max: MAX_WORD_LENGTH,
                        });
                    }
                    LongWordPolicy::Skip => {
                        warn!("skipping {length}-letter word (maximum is {MAX_WORD_LENGTH})");
                        skipped += 1;
                        continue;
                    }
                }
            }
            if let Some(invalid_char) = word.chars().find(|&c| Letter::from_char(c).is_none()) {
                return Err(AnagramError::InvalidInput { word, invalid_char });
            }
            store.words.push(word);
        }
        debug!("word store holds {} words ({skipped} skipped)", store.words.len());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Word length -> position of the *last* entry of that length.
///
/// Only lengths that actually occur are present. Keys keep insertion order,
/// which is the dictionary's descending length order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthIndex {
    last_of_length: IndexMap<usize, usize>,
    /// Length L -> first position with length <= L, for L in 0..=MAX_WORD_LENGTH.
    first_at_most: Vec<Option<usize>>,
}

impl LengthIndex {
    /// Single pass over lengths that must already be non-increasing.
    fn build(lengths: impl IntoIterator<Item = usize>) -> LengthIndex {
        let mut last_of_length = IndexMap::new();
        let mut previous = usize::MAX;
        for (index, length) in lengths.into_iter().enumerate() {
            debug_assert!(length <= previous, "lengths must be non-increasing");
            previous = length;
            last_of_length.insert(length, index);
        }

        let mut first_at_most = vec![None; MAX_WORD_LENGTH + 1];
        let mut start = 0;
        for (&group_length, &last) in &last_of_length {
            // slots not claimed by a longer group start at this group
            for slot in first_at_most.iter_mut().skip(group_length) {
                if slot.is_none() {
                    *slot = Some(start);
                }
            }
            start = last + 1;
        }
        LengthIndex {
            last_of_length,
            first_at_most,
        }
    }

    /// Position of the last word with exactly `length` letters, or `None`
    /// if no word has that length.
    pub fn last_of(&self, length: usize) -> Option<usize> {
        self.last_of_length.get(&length).copied()
    }

    /// Position of the first word with at most `length` letters.
    ///
    /// `None` means no word of this length or shorter remains.
    pub fn first_at_most(&self, length: usize) -> Option<usize> {
        self.first_at_most
            .get(length.min(MAX_WORD_LENGTH))
            .copied()
            .flatten()
    }

    /// Lengths present, longest first.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.last_of_length.keys().copied()
    }
}

/// Words of a [`WordStore`] ordered by non-increasing length.
///
/// Equal-length words keep their relative source order, so the layout (and
/// therefore the search output) is reproducible.
#[derive(Debug, Clone)]
pub struct Dictionary<'a> {
    store: &'a WordStore,
    entries: Vec<usize>,
    length_index: LengthIndex,
}

impl<'a> Dictionary<'a> {
    /// A dictionary over every word of `store`.
    pub fn new(store: &'a WordStore) -> Dictionary<'a> {
        Dictionary::from_entries(store, (0..store.len()).collect())
    }

    /// Sort `entries` (indices into `store`) and index them.
    pub(crate) fn from_entries(store: &'a WordStore, mut entries: Vec<usize>) -> Dictionary<'a> {
        // stable: ties stay in their given order
        entries.sort_by_key(|&i| Reverse(store.words[i].len()));
        let length_index = LengthIndex::build(entries.iter().map(|&i| store.words[i].len()));
        Dictionary {
            store,
            entries,
            length_index,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The word at `index`. Panics if `index >= self.len()`.
    pub fn word(&self, index: usize) -> &'a str {
        let store: &'a WordStore = self.store;
        &store.words[self.entries[index]]
    }

    /// Position of the word at `index` in the word source.
    pub fn source_index(&self, index: usize) -> usize {
        self.entries[index]
    }

    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        let store: &'a WordStore = self.store;
        self.entries.iter().map(move |&i| store.words[i].as_str())
    }

    pub fn length_index(&self) -> &LengthIndex {
        &self.length_index
    }

    pub fn store(&self) -> &'a WordStore {
        self.store
    }
}

/// Two dictionaries are equal when they view the same store the same way.
impl PartialEq for Dictionary<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.store, other.store)
            && self.entries == other.entries
            && self.length_index == other.length_index
    }
}

impl Eq for Dictionary<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(words: &[&str]) -> WordStore {
        WordStore::from_words(words.iter().copied(), &LoadOptions::default()).unwrap()
    }

    #[test]
    fn test_sorted_longest_first_with_stable_ties() {
        let store = store(&["lo", "hel", "fjas", "leloh", "olleh", "ab"]);
        let dict = Dictionary::new(&store);
        let words: Vec<_> = dict.words().collect();
        assert_eq!(words, vec!["leloh", "olleh", "fjas", "hel", "lo", "ab"]);
        assert_eq!(dict.source_index(0), 3);
        assert_eq!(dict.source_index(5), 5);
        assert_eq!(dict.word(3), "hel");
    }

    #[test]
    fn test_length_index_records_last_of_each_length() {
        let store = store(&["lo", "hel", "fjas", "leloh", "olleh", "ab"]);
        let dict = Dictionary::new(&store);
        let index = dict.length_index();
        assert_eq!(index.last_of(5), Some(1));
        assert_eq!(index.last_of(4), Some(2));
        assert_eq!(index.last_of(3), Some(3));
        assert_eq!(index.last_of(2), Some(5));
        assert_eq!(index.last_of(1), None);
        assert_eq!(index.last_of(6), None);
        assert_eq!(index.lengths().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_first_at_most_handles_absent_lengths() {
        let store = store(&["abcdef", "abc", "abc", "a"]);
        let dict = Dictionary::new(&store);
        let index = dict.length_index();
        assert_eq!(index.first_at_most(10), Some(0));
        assert_eq!(index.first_at_most(6), Some(0));
        assert_eq!(index.first_at_most(5), Some(1));
        assert_eq!(index.first_at_most(3), Some(1));
        assert_eq!(index.first_at_most(2), Some(3));
        assert_eq!(index.first_at_most(1), Some(3));
        assert_eq!(index.first_at_most(0), None);
        assert_eq!(index.first_at_most(MAX_WORD_LENGTH + 50), Some(0));
    }

    #[test]
    fn test_first_at_most_agrees_with_linear_scan() {
        let store = store(&["abcdefgh", "abcde", "abcde", "abc", "ab", "ab", "a"]);
        let dict = Dictionary::new(&store);
        let index = dict.length_index();
        for length in 0..=MAX_WORD_LENGTH + 5 {
            let scanned = (0..dict.len()).find(|&i| dict.word(i).len() <= length);
            assert_eq!(index.first_at_most(length), scanned, "length {length}");
        }
    }

    #[test]
    fn test_empty_dictionary() {
        let store = WordStore::default();
        let dict = Dictionary::new(&store);
        assert!(dict.is_empty());
        assert_eq!(dict.length_index().first_at_most(5), None);
    }

    #[test]
    fn test_rejects_invalid_words() {
        let result = WordStore::from_words(["ok", "not-ok"], &LoadOptions::default());
        assert!(matches!(
            result,
            Err(AnagramError::InvalidInput { invalid_char: '-', .. })
        ));
        let result = WordStore::from_words(["ok", ""], &LoadOptions::default());
        assert!(matches!(result, Err(AnagramError::EmptyWord)));
    }

    #[test]
    fn test_long_word_policy() {
        let long = "a".repeat(MAX_WORD_LENGTH + 1);
        let max = "b".repeat(MAX_WORD_LENGTH);
        let words = vec!["cat".to_string(), long, max.clone()];

        let result = WordStore::from_words(words.clone(), &LoadOptions::default());
        match result {
            Err(AnagramError::WordTooLong { length, max, .. }) => {
                assert_eq!(length, 100);
                assert_eq!(max, 99);
            }
            other => panic!("expected WordTooLong, got {other:?}"),
        }

        let options = LoadOptions { long_words: LongWordPolicy::Skip };
        let store = WordStore::from_words(words, &options).unwrap();
        assert_eq!(store.words(), &["cat".to_string(), max]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let store = store(&["ab", "ab"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some("ab"));
        assert_eq!(store.get(2), None);
        assert_eq!(Dictionary::new(&store).len(), 2);
    }
}
