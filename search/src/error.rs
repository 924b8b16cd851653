//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, expansion cap) are expressed via
//! [`crate::outcome::SearchOutcome`].

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Start and goal grids have different dimensions.
    #[error("start grid is {start}x{start} but goal grid is {goal}x{goal}")]
    DimensionMismatch { start: usize, goal: usize },
    /// The search policy is not usable.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
