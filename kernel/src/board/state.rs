//! `BoardState`: immutable board snapshot with a cached blank position.
//!
//! # Equality semantics
//!
//! Two states are equal when their cells are equal. The cached blank
//! coordinates are derived from the cells, so they never disagree.

use std::fmt;

use crate::board::grid::{Grid, BLANK};
use crate::board::key::StateKey;

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in move-generation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset applied to the blank.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}

/// Immutable sliding-tile configuration.
///
/// Only constructible from a validated [`Grid`] or by moving the blank of an
/// existing state, so `cells` is always a permutation with one blank and
/// `blank_row`/`blank_col` always point at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    dimension: usize,
    cells: Box<[u8]>,
    blank_row: usize,
    blank_col: usize,
}

impl BoardState {
    /// Snapshot a validated grid.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let dimension = grid.dimension();
        let cells: Box<[u8]> = grid.cells().into();
        // Grid validation guarantees the blank is present.
        let blank = cells.iter().position(|&c| c == BLANK).unwrap_or_default();
        Self {
            dimension,
            cells,
            blank_row: blank / dimension,
            blank_col: blank % dimension,
        }
    }

    /// Convert back to a grid.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        Grid::from_validated(self.dimension, self.cells.to_vec())
    }

    /// Side length.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Row-major labels.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub const fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Label at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.dimension + col]
    }

    /// Canonical key for visited-table lookups.
    #[must_use]
    pub fn key(&self) -> StateKey {
        StateKey::from_cells(&self.cells)
    }

    /// Move the blank one step. Returns `None` when the move would leave the
    /// grid.
    #[must_use]
    pub fn apply(&self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.blank_row.checked_add_signed(dr)?;
        let col = self.blank_col.checked_add_signed(dc)?;
        if row >= self.dimension || col >= self.dimension {
            return None;
        }

        let from = self.blank_row * self.dimension + self.blank_col;
        let to = row * self.dimension + col;
        let mut cells = self.cells.clone();
        cells.swap(from, to);
        Some(Self {
            dimension: self.dimension,
            cells,
            blank_row: row,
            blank_col: col,
        })
    }

    /// Lazily yield every legal successor in up, down, left, right order.
    #[must_use]
    pub fn successors(&self) -> Successors<'_> {
        Successors {
            state: self,
            next: 0,
        }
    }
}

/// Iterator returned by [`BoardState::successors`].
#[derive(Debug, Clone)]
pub struct Successors<'a> {
    state: &'a BoardState,
    next: usize,
}

impl Iterator for Successors<'_> {
    type Item = (Direction, BoardState);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&direction) = Direction::ALL.get(self.next) {
            self.next += 1;
            if let Some(child) = self.state.apply(direction) {
                return Some((direction, child));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Direction::ALL.len() - self.next))
    }
}
