//! Canonical state key.

use std::fmt;

/// Order-preserving serialization of a board's cells.
///
/// Two boards with identical cells produce identical keys and vice versa, so
/// the key stands in for the board in visited-table lookups. Labels are
/// stored one byte each, row-major.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(Box<[u8]>);

impl StateKey {
    /// Key for the given row-major cells.
    #[must_use]
    pub fn from_cells(cells: &[u8]) -> Self {
        Self(cells.into())
    }

    /// Raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateKey({})", hex::encode(&self.0))
    }
}
