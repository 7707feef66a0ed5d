//! The result of one placement pass: the filled grid, its bounds, and what
//! happened to every word.

use crate::errors::PuzzleError;
use crate::grid::{Bounds, Direction, Grid, Placement};
use crate::placement::SkipReason;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Marker printed for an occupied cell when letters are hidden.
pub const HIDDEN_CELL: char = '_';
/// Marker printed for a cell no word uses.
pub const EMPTY_CELL: char = ' ';

/// A word that made it onto the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    /// Position in the caller's input.
    pub index: usize,
    /// Normalized (uppercase) word.
    pub word: String,
    pub clue: String,
    pub placement: Placement,
    pub total_matches: usize,
}

impl PlacedWord {
    /// Cells covered by this word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.placement.cells(self.word.chars().count())
    }
}

/// A word that was left off the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnplacedWord {
    pub index: usize,
    pub word: String,
    pub clue: String,
    pub reason: SkipReason,
    pub total_matches: usize,
}

/// One line of the clue list printed under the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedClue {
    pub number: usize,
    pub direction: Direction,
    pub word: String,
    pub clue: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    grid: Grid,
    bounds: Option<Bounds>,
    placed: Vec<PlacedWord>,
    unplaced: Vec<UnplacedWord>,
}

impl Crossword {
    pub(crate) fn new(
        grid: Grid,
        bounds: Option<Bounds>,
        placed: Vec<PlacedWord>,
        unplaced: Vec<UnplacedWord>,
    ) -> Self {
        Self { grid, bounds, placed, unplaced }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Bounding rectangle of the occupied cells; `None` when nothing was placed.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Placed words, in the order they were placed.
    #[must_use]
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    #[must_use]
    pub fn unplaced(&self) -> &[UnplacedWord] {
        &self.unplaced
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row, col)
    }

    /// Number the start cells in reading order and list clues across first,
    /// then down.
    ///
    /// A cell that starts both an across and a down word gets one number.
    #[must_use]
    pub fn clue_numbers(&self) -> Vec<NumberedClue> {
        // BTreeMap keys iterate in row-major order
        let mut numbers: BTreeMap<(usize, usize), usize> = self
            .placed
            .iter()
            .map(|p| ((p.placement.row, p.placement.col), 0))
            .collect();
        for (n, number) in numbers.values_mut().enumerate() {
            *number = n + 1;
        }

        let mut clues: Vec<NumberedClue> = self
            .placed
            .iter()
            .map(|p| NumberedClue {
                number: numbers[&(p.placement.row, p.placement.col)],
                direction: p.placement.direction,
                word: p.word.clone(),
                clue: p.clue.clone(),
            })
            .collect();
        clues.sort_by_key(|c| (c.direction == Direction::Down, c.number));
        clues
    }

    /// The grid cropped to [`Crossword::bounds`], one string per row.
    ///
    /// Occupied cells show their letter when `reveal` is set and
    /// [`HIDDEN_CELL`] otherwise; unused cells print [`EMPTY_CELL`]. Cells are
    /// separated by one space, so every row is `2 * width - 1` characters.
    #[must_use]
    pub fn rows(&self, reveal: bool) -> Vec<String> {
        let Some(b) = self.bounds else {
            return Vec::new();
        };
        let mut rows = Vec::with_capacity(b.height());
        for row in b.top..=b.bottom {
            let mut line = String::with_capacity(2 * b.width());
            for col in b.left..=b.right {
                if col > b.left {
                    line.push(' ');
                }
                line.push(match self.grid.get(row, col) {
                    Some(c) if reveal => c,
                    Some(_) => HIDDEN_CELL,
                    None => EMPTY_CELL,
                });
            }
            rows.push(line);
        }
        rows
    }

    /// [`Crossword::rows`] joined with newlines (each row newline-terminated).
    #[must_use]
    pub fn render(&self, reveal: bool) -> String {
        self.rows(reveal).iter().map(|row| format!("{row}\n")).collect()
    }

    /// Replay every recorded placement onto an empty grid and compare.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ReplayMismatch`] at the first cell where a
    /// placement leaves the grid, two placements disagree, or the replayed grid
    /// differs from the stored one.
    pub fn verify(&self) -> Result<(), PuzzleError> {
        let mut replay = Grid::new(self.grid.size());
        for word in &self.placed {
            for (c, (row, col)) in word.word.chars().zip(word.cells()) {
                if !replay.in_bounds(row, col) || replay.get(row, col).is_some_and(|existing| existing != c) {
                    return Err(PuzzleError::ReplayMismatch { row, col });
                }
                replay.set(row, col, c);
            }
        }

        let size = self.grid.size();
        for row in 0..size {
            for col in 0..size {
                if replay.get(row, col) != self.grid.get(row, col) {
                    return Err(PuzzleError::ReplayMismatch { row, col });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
