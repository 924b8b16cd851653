//! Solver configuration.
//!
//! Load configuration from TOML to pick the heuristic, cap expansions, or
//! override the goal without code changes.
//!
//! # Examples
//!
//! ```
//! use tessel_harness::config::SolverConfig;
//! use tessel_search::heuristic::Heuristic;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     heuristic = "misplaced-tiles"
//!     max_expansions = 50000
//!     goal = [[1, 2, 3], [8, 0, 4], [7, 6, 5]]
//! "#).unwrap();
//!
//! assert_eq!(config.heuristic, Heuristic::MisplacedTiles);
//! assert_eq!(config.to_policy().max_expansions, Some(50_000));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tessel_kernel::board::grid::Grid;
use tessel_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use tessel_search::heuristic::Heuristic;
use tessel_search::policy::SearchPolicy;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfig {
    /// Cost-estimate strategy.
    #[serde(default)]
    pub heuristic: Heuristic,

    /// Hard cap on node expansions per solve. Absent means exhaustive.
    #[serde(default)]
    pub max_expansions: Option<u64>,

    /// Goal grid. Absent means the conventional solved grid of the start's
    /// dimension.
    #[serde(default)]
    pub goal: Option<Grid>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with a specific heuristic.
    #[must_use]
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..Self::default()
        }
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, contains invalid TOML, or
    /// fails [`SolverConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error on invalid TOML (including malformed goal grids) or a
    /// failed [`SolverConfig::validate`].
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero expansion cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_policy()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Search policy derived from this configuration.
    #[must_use]
    pub fn to_policy(&self) -> SearchPolicy {
        SearchPolicy {
            heuristic: self.heuristic,
            max_expansions: self.max_expansions,
        }
    }

    /// Goal for a start grid of `dimension`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if no goal is configured and
    /// `dimension` is unsupported.
    pub fn goal_for(&self, dimension: usize) -> Result<Grid, ConfigError> {
        match &self.goal {
            Some(goal) => Ok(goal.clone()),
            None => Grid::solved(dimension).map_err(|e| ConfigError::Invalid(e.to_string())),
        }
    }

    /// Content digest of the configuration, for binding into reports.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration can't be
    /// serialized.
    pub fn digest(&self) -> Result<ContentHash, ConfigError> {
        let bytes = serde_json::to_vec(self).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(canonical_hash(HashDomain::SolverConfig, &bytes))
    }
}
