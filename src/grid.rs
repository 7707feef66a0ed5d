//! The square letter grid shared by one placement pass.
//!
//! Coordinates are `(row, col)`, both in `[0, size)`. [`Direction::Down`] grows
//! the row per character and [`Direction::Across`] grows the column; rendering
//! uses the same convention, so a word placed `Across` prints left to right.

use serde::{Serialize, Serializer};
use std::fmt;

/// Direction a word runs in. Serialized as its numeric [`Direction::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Code `0`: one row further per character.
    Down,
    /// Code `1`: one column further per character.
    Across,
}

impl Direction {
    /// Numeric code (`0` = down, `1` = across), the form the wasm output carries.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Direction::Down => 0,
            Direction::Across => 1,
        }
    }

    #[must_use]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Down => Direction::Across,
            Direction::Across => Direction::Down,
        }
    }

    /// `(row, col)` step taken per character.
    #[must_use]
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Across => (0, 1),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Across => write!(f, "across"),
        }
    }
}

/// Origin and direction of one word on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    #[must_use]
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self { row, col, direction }
    }

    /// Cell of character `i`. Callers bounds-check the result.
    #[must_use]
    pub fn cell(&self, i: usize) -> (usize, usize) {
        let (dr, dc) = self.direction.step();
        (self.row + dr * i, self.col + dc * i)
    }

    /// Every cell covered by a word of length `len`.
    pub fn cells(&self, len: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..len).map(move |i| self.cell(i))
    }
}

/// Inclusive rectangle of occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Bounds {
    /// The one-cell rectangle at `(row, col)`.
    #[must_use]
    pub fn at(row: usize, col: usize) -> Self {
        Self { top: row, left: col, bottom: row, right: col }
    }

    /// Grow to include `(row, col)`.
    pub fn extend(&mut self, row: usize, col: usize) {
        self.top = self.top.min(row);
        self.left = self.left.min(col);
        self.bottom = self.bottom.max(row);
        self.right = self.right.max(col);
    }

    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.top..=self.bottom).contains(&row) && (self.left..=self.right).contains(&col)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }
}

/// A fixed `size × size` matrix of optional letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![None; size * size] }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Letter at `(row, col)`; `None` for empty or out-of-range cells.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if self.in_bounds(row, col) {
            self.cells[row * self.size + col]
        } else {
            None
        }
    }

    /// Like [`Grid::get`] but with signed coordinates, for neighbour checks
    /// that may step off the top or left edge.
    #[must_use]
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> Option<char> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => self.get(r, c),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// Write `c` at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the cell is outside the grid. The placement engine only writes
    /// cells that passed its fit check.
    pub(crate) fn set(&mut self, row: usize, col: usize, c: char) {
        assert!(self.in_bounds(row, col), "cell ({row}, {col}) outside {0}x{0} grid", self.size);
        let idx = row * self.size + col;
        debug_assert!(
            self.cells[idx].map_or(true, |existing| existing == c),
            "overwriting {:?} with {c:?} at ({row}, {col})",
            self.cells[idx]
        );
        self.cells[idx] = Some(c);
    }

    /// Iterate `(row, col, letter)` over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|c| (i / self.size, i % self.size, c)))
    }

    /// Tight bounding rectangle of every occupied cell, or `None` for an empty grid.
    #[must_use]
    pub fn occupied_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for (row, col, _) in self.occupied() {
            match bounds.as_mut() {
                Some(b) => b.extend(row, col),
                None => bounds = Some(Bounds::at(row, col)),
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_codes() {
        assert_eq!(Direction::Down.code(), 0);
        assert_eq!(Direction::Across.code(), 1);
        assert_eq!(Direction::Down.perpendicular(), Direction::Across);
        assert_eq!(Direction::Across.perpendicular(), Direction::Down);
    }

    #[test]
    fn test_placement_cells() {
        let down = Placement::new(2, 3, Direction::Down);
        assert_eq!(down.cells(3).collect::<Vec<_>>(), vec![(2, 3), (3, 3), (4, 3)]);
        let across = Placement::new(2, 3, Direction::Across);
        assert_eq!(across.cells(3).collect::<Vec<_>>(), vec![(2, 3), (2, 4), (2, 5)]);
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(4);
        assert!(grid.is_empty_at(1, 2));
        grid.set(1, 2, 'Q');
        assert_eq!(grid.get(1, 2), Some('Q'));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get_signed(-1, 2), None);
        assert_eq!(grid.get_signed(1, 2), Some('Q'));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(3);
        grid.set(3, 0, 'A');
    }

    #[test]
    fn test_occupied_bounds() {
        let mut grid = Grid::new(8);
        assert_eq!(grid.occupied_bounds(), None);
        grid.set(2, 5, 'A');
        grid.set(6, 1, 'B');
        let b = grid.occupied_bounds().unwrap();
        assert_eq!(b, Bounds { top: 2, left: 1, bottom: 6, right: 5 });
        assert_eq!(b.height(), 5);
        assert_eq!(b.width(), 5);
        assert!(b.contains(4, 3));
        assert!(!b.contains(7, 3));
    }

    #[test]
    fn test_occupied_row_major() {
        let mut grid = Grid::new(3);
        grid.set(2, 0, 'C');
        grid.set(0, 1, 'A');
        grid.set(1, 2, 'B');
        let letters: Vec<char> = grid.occupied().map(|(_, _, c)| c).collect();
        assert_eq!(letters, vec!['A', 'B', 'C']);
    }
}
