//! Heuristic strategies: `(state, goal) → non-negative estimate`.
//!
//! The strategy set is closed. Dispatch is a single exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tessel_kernel::board::grid::BLANK;
use tessel_kernel::board::state::BoardState;

/// Cost-estimate strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Always 0. Degenerates into uniform-cost search.
    UniformCost,
    /// Non-blank cells whose label differs from the goal at the same position.
    MisplacedTiles,
    /// Sum of row and column offsets of every non-blank tile from its goal cell.
    #[default]
    ManhattanDistance,
}

impl Heuristic {
    /// All strategies, weakest first.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::UniformCost,
        Heuristic::MisplacedTiles,
        Heuristic::ManhattanDistance,
    ];

    /// Stable kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::UniformCost => "uniform-cost",
            Heuristic::MisplacedTiles => "misplaced-tiles",
            Heuristic::ManhattanDistance => "manhattan-distance",
        }
    }

    /// Estimate the remaining moves from `state` to the goal.
    ///
    /// `state` must have the same dimension as the goal `layout` was built from.
    #[must_use]
    pub fn estimate(self, state: &BoardState, layout: &GoalLayout) -> u32 {
        debug_assert_eq!(state.dimension(), layout.dimension);
        match self {
            Heuristic::UniformCost => 0,
            Heuristic::MisplacedTiles => misplaced_tiles(state, layout),
            Heuristic::ManhattanDistance => manhattan_distance(state, layout),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown heuristic selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic {input:?}; expected uniform-cost, misplaced-tiles, manhattan-distance or 1-3")]
pub struct ParseHeuristicError {
    pub input: String,
}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    /// Accepts the kebab-case names and the numeric menu selectors `1`-`3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "uniform-cost" | "1" => Ok(Heuristic::UniformCost),
            "misplaced-tiles" | "2" => Ok(Heuristic::MisplacedTiles),
            "manhattan-distance" | "3" => Ok(Heuristic::ManhattanDistance),
            other => Err(ParseHeuristicError {
                input: other.to_string(),
            }),
        }
    }
}

/// Goal configuration indexed both by position and by label.
#[derive(Debug, Clone)]
pub struct GoalLayout {
    dimension: usize,
    cells: Box<[u8]>,
    /// `positions[label] = (row, col)` in the goal.
    positions: Box<[(usize, usize)]>,
}

impl GoalLayout {
    /// Index a goal state.
    #[must_use]
    pub fn new(goal: &BoardState) -> Self {
        let dimension = goal.dimension();
        let mut positions = vec![(0, 0); goal.cells().len()];
        for (index, &label) in goal.cells().iter().enumerate() {
            positions[usize::from(label)] = (index / dimension, index % dimension);
        }
        Self {
            dimension,
            cells: goal.cells().into(),
            positions: positions.into_boxed_slice(),
        }
    }

    /// Goal cell labels, row-major.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Goal `(row, col)` of `label`.
    #[must_use]
    pub fn position_of(&self, label: u8) -> (usize, usize) {
        self.positions[usize::from(label)]
    }
}

fn misplaced_tiles(state: &BoardState, layout: &GoalLayout) -> u32 {
    let count = state
        .cells()
        .iter()
        .zip(layout.cells.iter())
        .filter(|&(&cell, &goal)| cell != BLANK && cell != goal)
        .count();
    // At most dimension² - 1 <= 255.
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn manhattan_distance(state: &BoardState, layout: &GoalLayout) -> u32 {
    let dimension = state.dimension();
    let total: usize = state
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell != BLANK)
        .map(|(index, &cell)| {
            let (goal_row, goal_col) = layout.position_of(cell);
            (index / dimension).abs_diff(goal_row) + (index % dimension).abs_diff(goal_col)
        })
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}
