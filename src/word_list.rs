//! `word_list`: load the `{ word, clue }` pairs for one puzzle
//!
//! A word list is plain text, one entry per line:
//!
//! ```text
//! # animals for week 3
//! tucan;Bird with a huge beak
//! dingo;Wild dog from Australia
//! koala
//! ```
//!
//! The parsing logic:
//! - Each line is split on its *first* `;` into `word` and `clue`; both are trimmed.
//! - A line without a `;` is a word with an empty clue.
//! - Blank lines and lines starting with `#` are skipped.
//! - Duplicate words (compared after normalization) keep their first occurrence.
//! - Input order is preserved, since it is also the placement order.
//!
//! Like the rest of the crate this is WASM-friendly: `parse_from_str(...)` works
//! everywhere, and `load_from_path(...)` is only compiled for native builds.

use crate::word::{normalize, WordClue};
use log::debug;
use std::collections::HashSet;

/// Parsed, deduplicated word list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub entries: Vec<WordClue>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    ///
    /// This never fails: lines that carry no word are skipped.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut seen: HashSet<String> = HashSet::new();
        let entries = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                let (word, clue) = match line.split_once(';') {
                    Some((word, clue)) => (word.trim(), clue.trim()),
                    None => (line, ""),
                };
                if word.is_empty() {
                    debug!("skipping line without a word: {raw_line:?}");
                    return None;
                }
                if !seen.insert(normalize(word)) {
                    debug!("skipping duplicate word {word:?}");
                    return None;
                }
                Some(WordClue::new(word, clue))
            })
            .collect();

        WordList { entries }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Append the entries of `other` whose words are not already present.
    pub fn extend(&mut self, other: WordList) {
        let mut seen: HashSet<String> = self.entries.iter().map(|e| normalize(&e.word)).collect();
        self.entries
            .extend(other.entries.into_iter().filter(|e| seen.insert(normalize(&e.word))));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &WordList) -> Vec<&str> {
        list.entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("tucan;Bird with a huge beak\ndingo;Wild dog");
        assert_eq!(
            list.entries,
            vec![WordClue::new("tucan", "Bird with a huge beak"), WordClue::new("dingo", "Wild dog")]
        );
    }

    #[test]
    fn test_parse_without_clue() {
        let list = WordList::parse_from_str("koala\nwombat;");
        assert_eq!(list.entries, vec![WordClue::new("koala", ""), WordClue::new("wombat", "")]);
    }

    #[test]
    fn test_parse_splits_on_first_semicolon() {
        let list = WordList::parse_from_str("emu;Big bird; cannot fly");
        assert_eq!(list.entries[0].clue, "Big bird; cannot fly");
    }

    #[test]
    fn test_parse_keeps_input_order() {
        let list = WordList::parse_from_str("zebra\napple\nmango");
        assert_eq!(words(&list), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let list = WordList::parse_from_str("# heading\n\n   \ncat\n  # indented comment\ndog\n");
        assert_eq!(words(&list), vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_missing_word() {
        let list = WordList::parse_from_str(";orphan clue\ncat");
        assert_eq!(words(&list), vec!["cat"]);
    }

    #[test]
    fn test_parse_deduplicates_after_normalization() {
        let list = WordList::parse_from_str("Sea Lion;first\nsealion;second\nSEALION;third");
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries[0], WordClue::new("Sea Lion", "first"));
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let list = WordList::parse_from_str("  cat  ;  Says meow  \n\tdog\t;\tBarks ");
        assert_eq!(list.entries, vec![WordClue::new("cat", "Says meow"), WordClue::new("dog", "Barks")]);
    }

    #[test]
    fn test_extend_skips_known_words() {
        let mut list = WordList::parse_from_str("cat;Says meow\ndog");
        list.extend(WordList::parse_from_str("CAT;Another cat\nemu"));
        assert_eq!(words(&list), vec!["cat", "dog", "emu"]);
        assert_eq!(list.entries[0].clue, "Says meow");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordList::load_from_path("does/not/exist.txt").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
