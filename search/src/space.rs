//! The sliding-tile puzzle as a [`SearchSpace`].

use tessel_kernel::board::key::StateKey;
use tessel_kernel::board::state::BoardState;

use crate::contract::SearchSpace;
use crate::heuristic::{GoalLayout, Heuristic};

/// Sliding-tile state space toward a fixed goal under one heuristic.
#[derive(Debug, Clone)]
pub struct PuzzleSpace {
    goal: BoardState,
    layout: GoalLayout,
    heuristic: Heuristic,
}

impl PuzzleSpace {
    /// Build the space for `goal`.
    #[must_use]
    pub fn new(goal: BoardState, heuristic: Heuristic) -> Self {
        let layout = GoalLayout::new(&goal);
        Self {
            goal,
            layout,
            heuristic,
        }
    }
}

impl SearchSpace for PuzzleSpace {
    type State = BoardState;
    type Key = StateKey;

    fn key(&self, state: &BoardState) -> StateKey {
        state.key()
    }

    fn successors<'a>(&'a self, state: &'a BoardState) -> impl Iterator<Item = BoardState> + 'a {
        state.successors().map(|(_, child)| child)
    }

    fn estimate(&self, state: &BoardState) -> u32 {
        self.heuristic.estimate(state, &self.layout)
    }

    fn is_goal(&self, state: &BoardState) -> bool {
        state.cells() == self.goal.cells()
    }
}
