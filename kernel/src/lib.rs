//! Tessel Kernel: the sliding-tile state space.
//!
//! # API Surface
//!
//! - [`board::grid::Grid`] -- validate caller-supplied rows at the boundary
//! - [`board::state::BoardState`] -- immutable snapshot with lazy move generation
//! - [`board::key::StateKey`] -- canonical key for deduplication
//! - [`proof::hash::canonical_hash`] -- domain-separated content digests
//!
//! # Module Dependency Direction
//!
//! `board` ← `proof`
//!
//! One-way only. `board` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod proof;
