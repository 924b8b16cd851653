//! Proof module: content hashing for reports and determinism checks.

pub mod hash;
