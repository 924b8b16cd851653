//! Board module: grid validation, immutable board states, canonical keys.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod grid;
pub mod key;
pub mod state;
