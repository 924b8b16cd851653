//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::heuristic::Heuristic;

/// Heuristic selection and the optional expansion cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchPolicy {
    /// Cost-estimate strategy.
    pub heuristic: Heuristic,
    /// Hard cap on node expansions. `None` searches exhaustively.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Exhaustive policy with the given heuristic.
    #[must_use]
    pub const fn with_heuristic(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            max_expansions: None,
        }
    }

    /// Validate that the policy can run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion cap, which
    /// would stop before the start state is examined.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}
