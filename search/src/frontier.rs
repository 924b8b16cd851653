//! Best-first frontier with decrease-key by lazy deletion.
//!
//! `BinaryHeap` has no in-place key update. The frontier keeps the set of
//! live node ids next to the heap. When a cheaper node replaces an open one,
//! the old id leaves the live set and the replacement is pushed; extraction
//! skips heap entries whose id is no longer live, so it never returns a node
//! that has been replaced by a cheaper one for the same state.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::node::{FrontierKey, NodeId};

/// Extraction from a frontier with no live entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("frontier is empty")]
pub struct EmptyFrontier;

/// A heap entry: ordering key plus the arena id it refers to.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to get
/// min-heap behavior (lowest `f` first).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

/// Priority structure ordered by ascending `f`, FIFO among equal `f`.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    live: HashSet<NodeId>,
    high_water: usize,
}

impl Frontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. O(log n).
    pub fn insert(&mut self, node: NodeId, key: FrontierKey) {
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.live.insert(node);
        self.high_water = self.high_water.max(self.len());
    }

    /// Remove and return the node with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyFrontier`] when no live entry remains.
    pub fn extract_min(&mut self) -> Result<NodeId, EmptyFrontier> {
        while let Some(entry) = self.heap.pop() {
            if self.live.remove(&entry.node) {
                return Ok(entry.node);
            }
        }
        Err(EmptyFrontier)
    }

    /// Replace `old` with `new` for the same state. If `old` is still in the
    /// frontier it is dropped and will never be extracted; otherwise this is a
    /// plain insert of `new`.
    pub fn decrease_key(&mut self, old: NodeId, new: NodeId, key: FrontierKey) {
        self.live.remove(&old);
        self.insert(new, key);
    }

    /// Whether `node` is in the frontier and not superseded.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.live.contains(&node)
    }

    /// Number of live (not superseded) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no live entry remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of the live size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
