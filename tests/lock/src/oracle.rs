//! Breadth-first distance oracle.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use tessel_kernel::board::grid::Grid;
use tessel_kernel::board::key::StateKey;
use tessel_kernel::board::state::BoardState;

/// Exact move distances to a fixed goal for every reachable configuration.
///
/// Moves are reversible, so a single BFS outward from the goal gives the
/// distance from every state to the goal.
#[derive(Debug)]
pub struct DistanceOracle {
    distances: HashMap<StateKey, u32>,
}

impl DistanceOracle {
    /// Build the oracle by exhausting the goal's component.
    #[must_use]
    pub fn build(goal: &Grid) -> Self {
        let root = BoardState::from_grid(goal);
        let mut distances = HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(root.key(), 0);
        queue.push_back((root, 0u32));

        while let Some((state, depth)) = queue.pop_front() {
            for (_, next) in state.successors() {
                if let Entry::Vacant(slot) = distances.entry(next.key()) {
                    slot.insert(depth + 1);
                    queue.push_back((next, depth + 1));
                }
            }
        }

        Self { distances }
    }

    /// Optimal depth from `start`, or `None` if the goal is unreachable.
    #[must_use]
    pub fn distance(&self, start: &Grid) -> Option<u32> {
        self.distances
            .get(&BoardState::from_grid(start).key())
            .copied()
    }

    /// Number of configurations reachable from the goal.
    #[must_use]
    pub fn reachable(&self) -> usize {
        self.distances.len()
    }
}
