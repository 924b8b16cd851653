//! Search results: termination, statistics, and the caller-facing outcome.

use serde::{Deserialize, Serialize};
use tessel_kernel::board::grid::Grid;

use crate::node::{NodeArena, NodeId};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier and goal-tested (stale pops excluded).
    pub nodes_expanded: u64,
    /// High-water mark of the live frontier size.
    pub max_frontier_size: u64,
    /// Successor states produced by move generation.
    pub nodes_generated: u64,
    /// Successors skipped because a path at least as cheap was known or the
    /// state was already expanded.
    pub duplicates_skipped: u64,
    /// Open states replaced by a strictly cheaper path (decrease-key).
    pub cost_improvements: u64,
    /// Popped entries discarded because their state was already closed.
    pub stale_discarded: u64,
}

/// Why the driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal node was expanded.
    GoalReached(NodeId),
    /// The frontier emptied without reaching the goal.
    FrontierExhausted,
    /// The caller's expansion cap was hit.
    ExpansionBudgetExceeded,
}

/// Everything one run of the generic driver produced.
#[derive(Debug)]
pub struct SearchRun<S> {
    pub termination: Termination,
    pub stats: SearchStats,
    /// Every node created, for path reconstruction.
    pub arena: NodeArena<S>,
}

impl<S: Clone> SearchRun<S> {
    /// States from start to goal inclusive, if the goal was reached.
    #[must_use]
    pub fn goal_path(&self) -> Option<Vec<S>> {
        match self.termination {
            Termination::GoalReached(id) => {
                Some(self.arena.path_to(id).into_iter().cloned().collect())
            }
            _ => None,
        }
    }

    /// Cost of the goal node, if the goal was reached.
    #[must_use]
    pub fn depth(&self) -> Option<u32> {
        match self.termination {
            Termination::GoalReached(id) => Some(self.arena.get(id).g),
            _ => None,
        }
    }
}

/// Result of [`crate::search::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Minimum-cost path found.
    Success {
        /// Grids from start to goal inclusive; `path.len() - 1 == depth`.
        path: Vec<Grid>,
        depth: u32,
        stats: SearchStats,
    },
    /// Frontier exhausted: the goal is unreachable from the start.
    NoSolution { stats: SearchStats },
    /// The expansion cap stopped the search before it could decide.
    BudgetExhausted { stats: SearchStats },
}

impl SearchOutcome {
    /// Returns `true` for [`SearchOutcome::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success { .. })
    }

    /// Statistics regardless of outcome.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Success { stats, .. }
            | SearchOutcome::NoSolution { stats }
            | SearchOutcome::BudgetExhausted { stats } => stats,
        }
    }

    /// Solution depth on success.
    #[must_use]
    pub fn depth(&self) -> Option<u32> {
        match self {
            SearchOutcome::Success { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    /// Solution path on success.
    #[must_use]
    pub fn path(&self) -> Option<&[Grid]> {
        match self {
            SearchOutcome::Success { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Stable snake-case name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            SearchOutcome::Success { .. } => "success",
            SearchOutcome::NoSolution { .. } => "no_solution",
            SearchOutcome::BudgetExhausted { .. } => "budget_exhausted",
        }
    }
}
