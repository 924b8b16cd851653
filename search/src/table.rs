//! Visited / best-cost table.
//!
//! Maps each discovered state key to the cheapest `g` seen so far and to
//! whether the state is still open (with its live frontier node) or closed.
//! Closed entries are never reopened: with unit move costs and a consistent
//! heuristic a state is expanded at its minimum cost.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::node::NodeId;

/// Membership status of a discovered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// In the frontier, represented by this node.
    Open(NodeId),
    /// Already expanded.
    Closed,
}

/// Best known cost and status for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub best_g: u32,
    pub status: EntryStatus,
}

/// How a rediscovered state relates to its table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Never seen.
    New,
    /// Open with a recorded cost no worse than the candidate.
    NoImprovement,
    /// Open with a strictly higher recorded cost; carries the node to replace.
    Improves { stale: NodeId },
    /// Already expanded.
    Closed,
}

/// Visited / best-cost table keyed by canonical state key.
#[derive(Debug)]
pub struct VisitedTable<K> {
    entries: HashMap<K, TableEntry>,
}

impl<K: Hash + Eq> VisitedTable<K> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Classify a candidate path of cost `g` to `key`.
    #[must_use]
    pub fn reconcile(&self, key: &K, g: u32) -> Reconcile {
        match self.entries.get(key) {
            None => Reconcile::New,
            Some(TableEntry {
                status: EntryStatus::Closed,
                ..
            }) => Reconcile::Closed,
            Some(&TableEntry {
                best_g,
                status: EntryStatus::Open(node),
            }) => {
                if best_g <= g {
                    Reconcile::NoImprovement
                } else {
                    Reconcile::Improves { stale: node }
                }
            }
        }
    }

    /// Record a state as open with cost `g`, represented by `node`.
    ///
    /// Overwrites an existing open entry (the cost-improvement path). Never
    /// reopens a closed entry; returns `false` in that case.
    pub fn record_open(&mut self, key: K, g: u32, node: NodeId) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if entry.status == EntryStatus::Closed {
                    return false;
                }
                entry.best_g = g;
                entry.status = EntryStatus::Open(node);
                true
            }
            Entry::Vacant(vacant) => {
                vacant.insert(TableEntry {
                    best_g: g,
                    status: EntryStatus::Open(node),
                });
                true
            }
        }
    }

    /// Mark a state as expanded. Returns `false` if it was not open.
    pub fn close(&mut self, key: &K) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) if entry.status != EntryStatus::Closed => {
                entry.status = EntryStatus::Closed;
                true
            }
            _ => false,
        }
    }
}

impl<K: Hash + Eq> Default for VisitedTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
