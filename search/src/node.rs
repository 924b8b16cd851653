//! Search nodes and the flat arena that owns them.
//!
//! Nodes never point at each other. Each stores the arena index of its
//! parent, and the root stores `None`. A node's parent is fixed at creation;
//! a cheaper path to the same state produces a new node, never a mutation.

/// Index of a node in its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
///
/// Ordering for frontier extraction uses `(f, creation_order)` where
/// `f = g + h`. Lower is better; ties go to the older node.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Predecessor on the best known path (`None` for the root).
    pub parent: Option<NodeId>,
    /// Full immutable state at this node.
    pub state: S,
    /// Path cost from the start (+1 per move).
    pub g: u32,
    /// Heuristic estimate of the remaining cost.
    pub h: u32,
    /// Global insertion counter for FIFO tie-breaking.
    pub creation_order: u64,
}

impl<S> SearchNode<S> {
    /// `f = g + h` (the frontier ordering key).
    #[must_use]
    pub fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }

    /// Ordering key for the frontier.
    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            f: self.f(),
            creation_order: self.creation_order,
        }
    }
}

/// The frontier ordering key: `(f, creation_order)`.
///
/// Lower `f` first, then older `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: u32,
    pub creation_order: u64,
}

/// Growable store of every node created during one search.
#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
    next_creation_order: u64,
}

impl<S> NodeArena<S> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_creation_order: 0,
        }
    }

    /// Allocate a node and stamp it with the next creation order.
    pub fn push(&mut self, parent: Option<NodeId>, state: S, g: u32, h: u32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            parent,
            state,
            g,
            h,
            creation_order: self.next_creation_order,
        });
        self.next_creation_order += 1;
        id
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// Number of nodes created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// States from the root to `id`, following parent indices.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<&S> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            path.push(&node.state);
            current = node.parent;
        }
        path.reverse();
        path
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}
