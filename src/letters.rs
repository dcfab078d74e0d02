use crate::errors::AnagramError;
use std::fmt::{Debug, Formatter};

pub const ALPHABET_SIZE: usize = 26;

/// A single lowercase Latin letter, stored as its offset from `'a'`.
///
/// The only way to obtain one is through [`Letter::from_char`] or
/// [`Letter::from_byte`], so every `Letter` indexes a 26-slot table safely.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Letter(u8);

impl Letter {
    pub fn from_char(c: char) -> Option<Letter> {
        if c.is_ascii_lowercase() {
            Some(Letter(c as u8 - b'a'))
        } else {
            None
        }
    }

    pub fn from_byte(b: u8) -> Option<Letter> {
        if b.is_ascii_lowercase() {
            Some(Letter(b - b'a'))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        char::from(b'a' + self.0)
    }

    /// All 26 letters, `a` first.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

/// The letters of a word that are still waiting to be used up.
///
/// This is a small `Copy` value: the search hands each branch its own copy
/// and mutates that copy, never the parent's.
/// `remaining_length` always equals the sum of `counts`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterMultiset {
    remaining_length: usize,
    counts: [u32; ALPHABET_SIZE],
}

impl LetterMultiset {
    /// Count the letters of `word`.
    ///
    /// Fails on the first character outside `a`-`z`. The empty word gives
    /// an exhausted multiset.
    pub fn from_word(word: &str) -> Result<LetterMultiset, AnagramError> {
        let mut multiset = LetterMultiset {
            remaining_length: 0,
            counts: [0; ALPHABET_SIZE],
        };
        for c in word.chars() {
            let letter = Letter::from_char(c).ok_or_else(|| AnagramError::InvalidInput {
                word: word.to_string(),
                invalid_char: c,
            })?;
            multiset.counts[letter.index()] += 1;
            multiset.remaining_length += 1;
        }
        Ok(multiset)
    }

    /// Use up one occurrence of `letter`. Returns false, and changes
    /// nothing, if none is left.
    pub fn try_consume(&mut self, letter: Letter) -> bool {
        let count = &mut self.counts[letter.index()];
        if *count > 0 {
            *count -= 1;
            self.remaining_length -= 1;
            true
        } else {
            false
        }
    }

    /// Use up every letter of `word`, or nothing at all if any letter
    /// is missing (or is not a letter).
    pub fn try_consume_word(&mut self, word: &str) -> bool {
        let mut next = *self;
        let fits = word
            .bytes()
            .all(|b| Letter::from_byte(b).is_some_and(|letter| next.try_consume(letter)));
        if fits {
            *self = next;
        }
        fits
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_length == 0
    }

    pub fn remaining_length(&self) -> usize {
        self.remaining_length
    }

    pub fn count(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    /// True if at least one `letter` is left.
    pub fn contains(&self, letter: Letter) -> bool {
        self.counts[letter.index()] > 0
    }
}

/// Pretty print the remaining letters in alphabetical order
impl Debug for LetterMultiset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LetterMultiset( ")?;
        for letter in Letter::all() {
            for _ in 0..self.count(letter) {
                write!(f, "{} ", letter.to_char())?;
            }
        }
        write!(f, ")")
    }
}
