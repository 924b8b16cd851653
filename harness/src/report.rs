//! Solve reports.
//!
//! A report binds the inputs of one solve (heuristic, start, goal) to its
//! outcome. Serialized bytes exclude wall-clock time, so two runs of the
//! same request produce byte-identical reports and equal digests.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tessel_kernel::board::grid::Grid;
use tessel_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use tessel_search::heuristic::Heuristic;
use tessel_search::outcome::SearchOutcome;

/// Result of one harness solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub heuristic: Heuristic,
    pub start: Grid,
    pub goal: Grid,
    pub outcome: SearchOutcome,
    /// Wall-clock time of the search. Not serialized.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SolveReport {
    /// Deterministic JSON bytes of the report (without `elapsed`).
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Digest over [`SolveReport::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(HashDomain::SolveReport, &self.to_json_bytes()?))
    }

    /// Digest over the outcome alone, independent of how it was requested.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn outcome_digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = serde_json::to_vec(&self.outcome)?;
        Ok(canonical_hash(HashDomain::SolveOutcome, &bytes))
    }
}
