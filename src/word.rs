//! Word normalization and the per-word cross-reference score.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entries shorter than this (after normalization) never reach the grid.
pub const MIN_WORD_LEN: usize = 2;

/// One `{ word, clue }` pair as supplied by the caller.
///
/// The clue is opaque: it is carried through to the result and never looked at
/// during placement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordClue {
    pub word: String,
    #[serde(default)]
    pub clue: String,
}

impl WordClue {
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self { word: word.into(), clue: clue.into() }
    }
}

impl From<&str> for WordClue {
    fn from(word: &str) -> Self {
        Self::new(word, "")
    }
}

/// Uppercase `raw` and drop every whitespace character.
///
/// `"  sea lion "` becomes `"SEALION"`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// A normalized word ready for placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Position in the caller's input (before short words were dropped).
    pub index: usize,
    pub chars: Vec<char>,
    pub clue: String,
    /// Number of (position, other word, other position) triples whose
    /// characters agree. Informational only: placement always follows input order.
    pub total_matches: usize,
}

impl WordEntry {
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Normalize `pairs`, drop entries shorter than [`MIN_WORD_LEN`], and fill in
/// `total_matches` for the survivors. Input order is preserved.
#[must_use]
pub fn prepare_entries(pairs: &[WordClue]) -> Vec<WordEntry> {
    let mut entries: Vec<WordEntry> = pairs
        .iter()
        .enumerate()
        .filter_map(|(index, pair)| {
            let normalized = normalize(&pair.word);
            let chars: Vec<char> = normalized.chars().collect();
            if chars.len() < MIN_WORD_LEN {
                debug!("dropping {:?}: shorter than {MIN_WORD_LEN} characters", pair.word);
                None
            } else {
                Some(WordEntry { index, chars, clue: pair.clue.clone(), total_matches: 0 })
            }
        })
        .collect();

    // Letter histogram over every surviving word; each word then subtracts its own
    // contribution so only matches against *other* words are counted.
    let mut all_counts: HashMap<char, usize> = HashMap::new();
    for entry in &entries {
        for &c in &entry.chars {
            *all_counts.entry(c).or_default() += 1;
        }
    }

    for entry in &mut entries {
        let mut own_counts: HashMap<char, usize> = HashMap::new();
        for &c in &entry.chars {
            *own_counts.entry(c).or_default() += 1;
        }
        entry.total_matches = entry
            .chars
            .iter()
            .map(|c| all_counts[c] - own_counts[c])
            .sum();
    }

    entries
}
