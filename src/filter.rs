use crate::dictionary::Dictionary;
use crate::letters::{Letter, LetterMultiset};
use log::debug;

/// True if every letter of `word` occurs at least once in `target`.
///
/// Only presence is checked, not quantity: "lll" fits "hello". The search
/// itself decides whether there are enough of each letter.
pub fn word_fits(word: &str, target: &LetterMultiset) -> bool {
    word.bytes()
        .all(|b| Letter::from_byte(b).is_some_and(|letter| target.contains(letter)))
}

/// Drop every word that uses a letter absent from `target`.
///
/// The result views the same word store, re-sorted and re-indexed.
pub fn filter<'a>(dict: &Dictionary<'a>, target: &LetterMultiset) -> Dictionary<'a> {
    let retained: Vec<usize> = (0..dict.len())
        .filter(|&index| word_fits(dict.word(index), target))
        .map(|index| dict.source_index(index))
        .collect();
    debug!(
        "filter kept {} of {} words for {target:?}",
        retained.len(),
        dict.len()
    );
    Dictionary::from_entries(dict.store(), retained)
}
