//! Shared helpers for tessel benchmark suites.

use lock_tests::scramble::random_walk;
use tessel_kernel::board::grid::{Grid, GridError};

/// A named benchmark instance.
#[derive(Debug, Clone)]
pub struct Regime {
    pub name: String,
    pub start: Grid,
    pub goal: Grid,
}

/// Seeded random walk of `moves` moves away from the solved grid.
///
/// # Errors
///
/// Returns [`GridError`] if `dimension` is unsupported.
pub fn scrambled(dimension: usize, moves: usize, seed: u64) -> Result<Grid, GridError> {
    Ok(random_walk(&Grid::solved(dimension)?, moves, seed))
}

/// Fixed instances spanning shallow to deep 3x3 solves plus one 4x4.
///
/// # Errors
///
/// Returns [`GridError`] if a built-in grid fails validation.
pub fn regimes() -> Result<Vec<Regime>, GridError> {
    let goal3 = Grid::solved(3)?;
    Ok(vec![
        Regime {
            name: "near_goal".into(),
            start: Grid::from_rows(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]])?,
            goal: goal3.clone(),
        },
        Regime {
            name: "default_start".into(),
            start: Grid::from_rows(&[[1, 6, 7], [5, 0, 3], [4, 8, 2]])?,
            goal: goal3.clone(),
        },
        Regime {
            name: "reversed_rows".into(),
            start: Grid::from_rows(&[[0, 1, 2], [3, 4, 5], [6, 7, 8]])?,
            goal: goal3,
        },
        Regime {
            name: "walk_4x4_24".into(),
            start: scrambled(4, 24, 11)?,
            goal: Grid::solved(4)?,
        },
    ])
}
