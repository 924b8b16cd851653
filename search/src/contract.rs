//! Search space contract trait.

use std::hash::Hash;

/// A state space the best-first driver can explore.
///
/// Every edge costs 1.
///
/// # Contract
///
/// - `key` must be injective over configurations: equal keys ⇔ equal states.
/// - `successors` must be deterministic: same state → same successors in the
///   same order.
/// - `estimate` must be admissible and consistent for the returned path to be
///   optimal; closed states are never reopened.
pub trait SearchSpace {
    /// Immutable state snapshot.
    type State: Clone;
    /// Canonical key used for deduplication.
    type Key: Hash + Eq;

    /// Canonical key of `state`.
    fn key(&self, state: &Self::State) -> Self::Key;

    /// Every state one move away from `state`, in a fixed order.
    fn successors<'a>(
        &'a self,
        state: &'a Self::State,
    ) -> impl Iterator<Item = Self::State> + 'a;

    /// Non-negative lower bound on the remaining cost from `state`.
    fn estimate(&self, state: &Self::State) -> u32;

    /// Whether `state` is the goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}
