//! Tessel Harness: the boundary between callers and the search core.
//!
//! The harness validates caller input, loads configuration, times runs, and
//! packages outcomes as reports with content digests. It does NOT implement
//! search logic; it delegates to `tessel_search::search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod puzzles;
pub mod report;
pub mod runner;
