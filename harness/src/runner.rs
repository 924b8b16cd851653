//! Harness runner: validates requests, runs the search core, packages reports.
//!
//! The runner uses ONLY `tessel_search::search::search`; it does not
//! implement any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! SolveRequest::from_rows() → SolverConfig::validate()
//!   → resolve goal (request, then config, then solved grid)
//!   → search() → SolveReport { outcome, elapsed }
//! ```

use std::time::Instant;

use rayon::prelude::*;
use tessel_kernel::board::grid::{Grid, GridError};
use tessel_search::error::SearchError;
use tessel_search::search::search;
use tracing::info;

use crate::config::{ConfigError, SolverConfig};
use crate::report::SolveReport;

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Raw grid input failed validation.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
    /// The search core rejected the request.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One puzzle to solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub start: Grid,
    /// Overrides the configured goal when present.
    pub goal: Option<Grid>,
}

impl SolveRequest {
    /// Request for `start` against the configured goal.
    #[must_use]
    pub fn new(start: Grid) -> Self {
        Self { start, goal: None }
    }

    /// Validate raw rows into a request.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidGrid`] if the rows are not a valid grid.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, RunError> {
        Ok(Self::new(Grid::from_rows(rows)?))
    }

    /// Same request with an explicit goal.
    #[must_use]
    pub fn with_goal(mut self, goal: Grid) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Same request with an explicit goal given as raw rows.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidGrid`] if the rows are not a valid grid.
    pub fn with_goal_rows<R: AsRef<[u32]>>(self, rows: &[R]) -> Result<Self, RunError> {
        Ok(self.with_goal(Grid::from_rows(rows)?))
    }
}

/// Solve one request under `config`.
///
/// # Errors
///
/// Returns [`RunError::Config`] for an invalid configuration and
/// [`RunError::Search`] when start and goal dimensions differ.
pub fn run_solve(request: &SolveRequest, config: &SolverConfig) -> Result<SolveReport, RunError> {
    config.validate()?;
    let goal = match &request.goal {
        Some(goal) => goal.clone(),
        None => config.goal_for(request.start.dimension())?,
    };

    let started = Instant::now();
    let outcome = search(&request.start, &goal, &config.to_policy())?;
    let elapsed = started.elapsed();

    info!(
        event = "run_complete",
        outcome = outcome.kind(),
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
    );

    Ok(SolveReport {
        heuristic: config.heuristic,
        start: request.start.clone(),
        goal,
        outcome,
        elapsed,
    })
}

/// Solve every request in parallel. Results are in request order.
pub fn run_batch(
    requests: &[SolveRequest],
    config: &SolverConfig,
) -> Vec<Result<SolveReport, RunError>> {
    requests
        .par_iter()
        .map(|request| run_solve(request, config))
        .collect()
}
