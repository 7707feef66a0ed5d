//! The word-placement engine.
//!
//! Words are tried strictly in input order. The first one is written at a fixed
//! anchor in the middle of the grid, running down. Every later word must cross
//! something already on the grid: for each pair of equal letters between the new
//! word and a placed word we derive a perpendicular candidate, keep the candidates
//! that fit, and pick one of them at random. A word with no fitting candidate is
//! skipped and reported; nothing is ever undone.
//!
//! # Examples
//!
//! ```
//! use assignmate::placement::{generate, PuzzleConfig};
//! use assignmate::word::WordClue;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let words = vec![WordClue::new("tucan", "Bird with a huge beak"), WordClue::new("dingo", "Wild dog")];
//! let mut rng = StdRng::seed_from_u64(7);
//! let crossword = generate(&words, &PuzzleConfig::default(), &mut rng)?;
//!
//! assert_eq!(crossword.placed().len(), 2);
//! assert!(crossword.unplaced().is_empty());
//! print!("{}", crossword.render(true));
//! # Ok::<(), assignmate::errors::PuzzleError>(())
//! ```

use crate::crossword::{Crossword, PlacedWord, UnplacedWord};
use crate::errors::PuzzleError;
use crate::grid::{Bounds, Direction, Grid, Placement};
use crate::word::{prepare_entries, WordClue, WordEntry};
use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_GRID_SIZE: usize = 32;
pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 128;
pub const DEFAULT_MAX_WORDS: usize = 64;

/// Knobs for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Upper limit on the number of `{ word, clue }` pairs accepted.
    pub max_words: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self { grid_size: DEFAULT_GRID_SIZE, max_words: DEFAULT_MAX_WORDS }
    }
}

impl PuzzleConfig {
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidGridSize`] if `grid_size` is outside
    /// `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            Ok(())
        } else {
            Err(PuzzleError::InvalidGridSize {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            })
        }
    }

    /// Origin of the first placed word.
    #[must_use]
    pub fn anchor(&self) -> (usize, usize) {
        (self.grid_size / 2, self.grid_size / 2)
    }
}

/// Why a word was left off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The word was first in line but does not fit at the anchor.
    OutOfBounds,
    /// No crossing with the words already placed fits on the grid.
    NoValidCrossing,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::OutOfBounds => write!(f, "does not fit on the grid"),
            SkipReason::NoValidCrossing => write!(f, "no valid crossing with the placed words"),
        }
    }
}

/// Why a single candidate placement failed the fit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// Part of the word would fall off the grid.
    OutOfBounds,
    /// A cell already holds a different letter.
    Conflict { row: usize, col: usize, existing: char, wanted: char },
    /// A newly filled cell would touch a letter beside it.
    Crowded { row: usize, col: usize },
    /// The cell just before or after the word is occupied, so the word would
    /// run straight into another one.
    Extends { row: usize, col: usize },
    /// Two consecutive cells are already filled, i.e. the word would lie along
    /// an existing word instead of crossing it.
    ParallelOverlap { row: usize, col: usize },
    /// The word touches nothing already on the grid.
    NoCrossing,
}

/// Check whether `chars` can be written at `placement`.
///
/// On success returns the number of crossings (cells already holding the right
/// letter). Zero crossings is only acceptable for the very first word; callers
/// decide.
pub(crate) fn check_fit(grid: &Grid, chars: &[char], placement: Placement) -> Result<usize, Rejection> {
    let len = chars.len();
    let (end_row, end_col) = placement.cell(len.saturating_sub(1));
    if !grid.in_bounds(end_row, end_col) {
        return Err(Rejection::OutOfBounds);
    }

    let (dr, dc) = placement.direction.step();
    let (before_row, before_col) = (placement.row as isize - dr as isize, placement.col as isize - dc as isize);
    if grid.get_signed(before_row, before_col).is_some() {
        return Err(Rejection::Extends { row: before_row as usize, col: before_col as usize });
    }
    let (after_row, after_col) = placement.cell(len);
    if !grid.is_empty_at(after_row, after_col) {
        return Err(Rejection::Extends { row: after_row, col: after_col });
    }

    let (sr, sc) = placement.direction.perpendicular().step();
    let mut crossings = 0;
    let mut prev_occupied = false;
    for (i, &wanted) in chars.iter().enumerate() {
        let (row, col) = placement.cell(i);
        match grid.get(row, col) {
            Some(existing) if existing != wanted => {
                return Err(Rejection::Conflict { row, col, existing, wanted });
            }
            Some(_) => {
                if prev_occupied {
                    return Err(Rejection::ParallelOverlap { row, col });
                }
                crossings += 1;
                prev_occupied = true;
            }
            None => {
                let (r, c) = (row as isize, col as isize);
                let left = grid.get_signed(r - sr as isize, c - sc as isize);
                if left.is_some() || !grid.is_empty_at(row + sr, col + sc) {
                    return Err(Rejection::Crowded { row, col });
                }
                prev_occupied = false;
            }
        }
    }

    Ok(crossings)
}

/// Mutable state of one generation pass. Never outlives the call to [`generate`].
struct Placer {
    grid: Grid,
    bounds: Option<Bounds>,
    placed: Vec<PlacedWord>,
    unplaced: Vec<UnplacedWord>,
}

impl Placer {
    fn new(grid_size: usize) -> Self {
        Self { grid: Grid::new(grid_size), bounds: None, placed: Vec::new(), unplaced: Vec::new() }
    }

    fn write(&mut self, entry: &WordEntry, placement: Placement) {
        for (i, &c) in entry.chars.iter().enumerate() {
            let (row, col) = placement.cell(i);
            self.grid.set(row, col, c);
            match self.bounds.as_mut() {
                Some(b) => b.extend(row, col),
                None => self.bounds = Some(Bounds::at(row, col)),
            }
        }
        debug!("placed {} at ({}, {}) {}", entry.text(), placement.row, placement.col, placement.direction);
        self.placed.push(PlacedWord {
            index: entry.index,
            word: entry.text(),
            clue: entry.clue.clone(),
            placement,
            total_matches: entry.total_matches,
        });
    }

    fn skip(&mut self, entry: &WordEntry, reason: SkipReason) {
        debug!("could not place {}: {reason}", entry.text());
        self.unplaced.push(UnplacedWord {
            index: entry.index,
            word: entry.text(),
            clue: entry.clue.clone(),
            reason,
            total_matches: entry.total_matches,
        });
    }

    /// Every distinct placement of `entry` that crosses a placed word and fits,
    /// in discovery order.
    fn candidates(&self, entry: &WordEntry) -> Vec<Placement> {
        let mut found: Vec<Placement> = Vec::new();
        for other in &self.placed {
            let direction = other.placement.direction.perpendicular();
            let (dr, dc) = direction.step();
            for (l, placed_char) in other.word.chars().enumerate() {
                let (cross_row, cross_col) = other.placement.cell(l);
                for (j, &c) in entry.chars.iter().enumerate() {
                    if c != placed_char {
                        continue;
                    }
                    // origin that puts character j on the crossing cell
                    let (Some(row), Some(col)) = (cross_row.checked_sub(dr * j), cross_col.checked_sub(dc * j)) else {
                        continue;
                    };
                    let candidate = Placement::new(row, col, direction);
                    if found.contains(&candidate) {
                        continue;
                    }
                    match check_fit(&self.grid, &entry.chars, candidate) {
                        Ok(crossings) if crossings > 0 => found.push(candidate),
                        Ok(_) => trace!("{}: {candidate:?} rejected: {:?}", entry.text(), Rejection::NoCrossing),
                        Err(rejection) => trace!("{}: {candidate:?} rejected: {rejection:?}", entry.text()),
                    }
                }
            }
        }
        found
    }

    fn finish(self) -> Crossword {
        debug_assert_eq!(self.bounds, self.grid.occupied_bounds(), "bounds must enclose exactly the occupied cells");
        Crossword::new(self.grid, self.bounds, self.placed, self.unplaced)
    }
}

/// Lay out `pairs` on a fresh grid.
///
/// `rng` breaks ties between equally valid crossings; pass a seeded generator
/// for reproducible puzzles. Words shorter than two letters are dropped
/// silently; words that cannot be placed are listed in
/// [`Crossword::unplaced`] and never abort the pass.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidGridSize`] or [`PuzzleError::TooManyWords`]
/// when `config` rejects the request. Placement itself never fails.
pub fn generate<R: Rng + ?Sized>(
    pairs: &[WordClue],
    config: &PuzzleConfig,
    rng: &mut R,
) -> Result<Crossword, PuzzleError> {
    config.validate()?;
    if pairs.len() > config.max_words {
        return Err(PuzzleError::TooManyWords { count: pairs.len(), max: config.max_words });
    }

    let entries = prepare_entries(pairs);
    let mut placer = Placer::new(config.grid_size);
    let (anchor_row, anchor_col) = config.anchor();

    for entry in &entries {
        debug!("trying {} (total matches {})", entry.text(), entry.total_matches);

        if placer.placed.is_empty() {
            let placement = Placement::new(anchor_row, anchor_col, Direction::Down);
            match check_fit(&placer.grid, &entry.chars, placement) {
                Ok(_) => placer.write(entry, placement),
                Err(_) => placer.skip(entry, SkipReason::OutOfBounds),
            }
            continue;
        }

        let candidates = placer.candidates(entry);
        debug!("{}: {} candidate placement(s)", entry.text(), candidates.len());
        match candidates.choose(rng) {
            Some(&placement) => placer.write(entry, placement),
            None => placer.skip(entry, SkipReason::NoValidCrossing),
        }
    }

    info!(
        "placed {}/{} words on a {}x{} grid",
        placer.placed.len(),
        entries.len(),
        config.grid_size,
        config.grid_size
    );

    Ok(placer.finish())
}
