//! `Grid`: the validated boundary form of a sliding-tile configuration.
//!
//! Callers hand the engine rows of integers. `Grid` is the only way those
//! rows become a [`BoardState`](super::state::BoardState), so every state the
//! search ever sees is a permutation of `0..dimension²` with exactly one blank.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label of the blank tile.
pub const BLANK: u8 = 0;

/// Smallest supported grid dimension.
pub const MIN_DIMENSION: usize = 2;

/// Largest supported grid dimension (labels must fit in a byte).
pub const MAX_DIMENSION: usize = 16;

/// Why a grid was rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No rows or no cells were supplied.
    #[error("grid is empty")]
    Empty,
    /// The dimension is outside `MIN_DIMENSION..=MAX_DIMENSION`.
    #[error("grid dimension {dimension} is outside {MIN_DIMENSION}..={MAX_DIMENSION}")]
    UnsupportedDimension { dimension: usize },
    /// A row has a different length than the number of rows.
    #[error("row {row} has {actual} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The flat cell count is not `dimension²`.
    #[error("expected {expected} cells for dimension {dimension}, got {actual}")]
    CellCountMismatch {
        dimension: usize,
        expected: usize,
        actual: usize,
    },
    /// A label is not in `0..dimension²`.
    #[error("label {label} at index {index} is outside 0..{limit}")]
    LabelOutOfRange {
        index: usize,
        label: u32,
        limit: usize,
    },
    /// A label appears more than once.
    #[error("label {label} appears more than once")]
    DuplicateLabel { label: u32 },
}

/// A square grid of tile labels, row-major, validated as a permutation of
/// `0..dimension²`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Grid {
    dimension: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from a dimension and row-major labels.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the dimension is unsupported, the cell count
    /// is wrong, or the labels are not a permutation of `0..dimension²`.
    pub fn new(dimension: usize, cells: &[u32]) -> Result<Self, GridError> {
        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(GridError::UnsupportedDimension { dimension });
        }
        let expected = dimension * dimension;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                dimension,
                expected,
                actual: cells.len(),
            });
        }

        let mut seen = vec![false; expected];
        let mut packed = Vec::with_capacity(expected);
        for (index, &label) in cells.iter().enumerate() {
            let slot = usize::try_from(label)
                .ok()
                .filter(|&l| l < expected)
                .ok_or(GridError::LabelOutOfRange {
                    index,
                    label,
                    limit: expected,
                })?;
            if seen[slot] {
                return Err(GridError::DuplicateLabel { label });
            }
            seen[slot] = true;
            // slot < 256 because dimension <= MAX_DIMENSION.
            #[allow(clippy::cast_possible_truncation)]
            packed.push(slot as u8);
        }

        Ok(Self {
            dimension,
            cells: packed,
        })
    }

    /// Build a grid from rows. The dimension is the number of rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotSquare`] for ragged rows, plus everything
    /// [`Grid::new`] rejects.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(GridError::Empty);
        }
        let mut flat = Vec::with_capacity(dimension * dimension);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != dimension {
                return Err(GridError::NotSquare {
                    row,
                    expected: dimension,
                    actual: cells.len(),
                });
            }
            flat.extend_from_slice(cells);
        }
        Self::new(dimension, &flat)
    }

    /// The conventional goal: `1, 2, …, n²-1` followed by the blank.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnsupportedDimension`] for dimensions outside
    /// `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn solved(dimension: usize) -> Result<Self, GridError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(GridError::UnsupportedDimension { dimension });
        }
        let total = dimension * dimension;
        #[allow(clippy::cast_possible_truncation)]
        let cells: Vec<u32> = (1..total as u32).chain(std::iter::once(0)).collect();
        Self::new(dimension, &cells)
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Row-major labels.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Label at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the dimension.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.dimension && col < self.dimension);
        self.cells[row * self.dimension + col]
    }

    /// Labels as rows of integers, the inverse of [`Grid::from_rows`].
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.dimension)
            .map(|row| row.iter().map(|&c| u32::from(c)).collect())
            .collect()
    }

    pub(crate) fn from_validated(dimension: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), dimension * dimension);
        Self { dimension, cells }
    }
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.dimension).enumerate() {
            if r > 0 {
                f.write_str(" / ")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
