//! Named puzzle instances.
//!
//! `DefaultStart` is the classic interactive instance (depth 16 under the
//! conventional goal). `NearGoal` is two moves out and is handy for smoke
//! runs under every heuristic.

use std::fmt;
use std::str::FromStr;

use tessel_kernel::board::grid::{Grid, GridError};

const DEFAULT_START: [[u32; 3]; 3] = [[1, 6, 7], [5, 0, 3], [4, 8, 2]];
const NEAR_GOAL: [[u32; 3]; 3] = [[1, 2, 3], [4, 0, 6], [7, 5, 8]];
const SOLVED: [[u32; 3]; 3] = [[1, 2, 3], [4, 5, 6], [7, 8, 0]];

/// A built-in 3x3 instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Puzzle {
    DefaultStart,
    NearGoal,
    Solved,
}

impl Puzzle {
    pub const ALL: [Puzzle; 3] = [Puzzle::DefaultStart, Puzzle::NearGoal, Puzzle::Solved];

    /// Stable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Puzzle::DefaultStart => "default-start",
            Puzzle::NearGoal => "near-goal",
            Puzzle::Solved => "solved",
        }
    }

    /// Raw rows.
    #[must_use]
    pub const fn rows(self) -> &'static [[u32; 3]; 3] {
        match self {
            Puzzle::DefaultStart => &DEFAULT_START,
            Puzzle::NearGoal => &NEAR_GOAL,
            Puzzle::Solved => &SOLVED,
        }
    }

    /// Validated grid.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError`] from grid validation.
    pub fn grid(self) -> Result<Grid, GridError> {
        Grid::from_rows(self.rows())
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown puzzle name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown puzzle {name:?}")]
pub struct UnknownPuzzle {
    pub name: String,
}

impl FromStr for Puzzle {
    type Err = UnknownPuzzle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Puzzle::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| UnknownPuzzle {
                name: name.to_string(),
            })
    }
}
