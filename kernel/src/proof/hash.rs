//! Canonical hashing types and domain separation.
//!
//! Algorithm: SHA-256. Every digest is computed over
//! `domain_prefix || data`, where the prefix is null-terminated and unique
//! per [`HashDomain`], so equal bytes hashed for different purposes never
//! collide.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"sha256:<hex>"`. Only [`canonical_hash`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Typed domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Search outcome (path + statistics).
    SolveOutcome,
    /// Full solve report (heuristic, start, goal, outcome).
    SolveReport,
    /// Solver configuration snapshot.
    SolverConfig,
}

impl HashDomain {
    /// All domain variants in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        HashDomain::SolveOutcome,
        HashDomain::SolveReport,
        HashDomain::SolverConfig,
    ];

    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            HashDomain::SolveOutcome => b"TESSEL::SOLVE_OUTCOME::V1\0",
            HashDomain::SolveReport => b"TESSEL::SOLVE_REPORT::V1\0",
            HashDomain::SolverConfig => b"TESSEL::SOLVER_CONFIG::V1\0",
        }
    }
}

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("sha256:{digest}"),
    }
}
