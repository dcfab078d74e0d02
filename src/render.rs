use crate::dictionary::Dictionary;
use crate::search::SolutionSet;
use std::io::{self, Write};

/// `{hel, lo}`
pub fn format_combination(words: &[&str]) -> String {
    format!("{{{}}}", words.join(", "))
}

/// Write one combination per line, in search order.
pub fn write_solutions<W: Write>(
    out: &mut W,
    solutions: &SolutionSet,
    dict: &Dictionary<'_>,
) -> io::Result<()> {
    for words in solutions.words(dict) {
        writeln!(out, "{}", format_combination(&words))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{LoadOptions, WordStore};
    use crate::letters::LetterMultiset;
    use crate::search::search;

    #[test]
    fn test_format_combination() {
        assert_eq!(format_combination(&["hel", "lo"]), "{hel, lo}");
        assert_eq!(format_combination(&["olleh"]), "{olleh}");
    }

    #[test]
    fn test_write_solutions() {
        let store =
            WordStore::from_words(["lo", "hel", "leloh"], &LoadOptions::default()).unwrap();
        let dict = Dictionary::new(&store);
        let solutions = search(&LetterMultiset::from_word("hello").unwrap(), &dict);

        let mut out = Vec::new();
        write_solutions(&mut out, &solutions, &dict).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{leloh}\n{hel, lo}\n");

        let mut out = Vec::new();
        write_solutions(&mut out, &SolutionSet::default(), &dict).unwrap();
        assert!(out.is_empty());
    }
}
