//! Tessel Search: deterministic best-first graph search over sliding-tile boards.
//!
//! This crate provides the search layer. It depends only on `tessel_kernel`;
//! it does NOT depend on `tessel_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! tessel_kernel  ←  tessel_search  ←  tessel_harness
//! (board, keys)     (frontier, nodes)  (config, reports, batches)
//! ```
//!
//! # Key types
//!
//! - [`search::solve`]: the single entry point: start + goal + heuristic → outcome
//! - [`heuristic::Heuristic`]: closed set of cost-estimate strategies
//! - [`frontier::Frontier`]: `f`-ordered priority queue with decrease-key
//! - [`table::VisitedTable`]: best known cost and open/closed status per state
//! - [`node::NodeArena`]: flat node store with parent indices
//! - [`contract::SearchSpace`]: trait the generic driver explores

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod search;
pub mod space;
pub mod table;
