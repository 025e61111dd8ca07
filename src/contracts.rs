// Contract-First Design - Stage 2
// This module defines the ordered-index contract (preconditions,
// postconditions, invariants) shared by the tree-backed index engines.
// The invariant checkers in the pure modules validate these at test time.

/// Core trait for ordered multimap index operations
///
/// An ordered index maps each distinct key to the sequence of values inserted
/// for it, in insertion order, and can enumerate its keys in ascending order.
/// Implementations are single-threaded; callers serialize access externally.
pub trait OrderedIndex {
    type Key: Ord;
    type Value;

    /// Insert a key-value pair
    ///
    /// # Preconditions
    /// - None beyond the `Ord` bound on keys; duplicate keys are expected
    ///
    /// # Postconditions
    /// - The value is immediately visible to `get`
    /// - A duplicate key appends to the existing value sequence, preserving
    ///   insertion order; nothing is overwritten or deduplicated
    /// - A new key becomes part of the ordered key enumeration
    ///
    /// # Invariants
    /// - `total_values` increases by exactly 1
    /// - `distinct_keys` increases by 1 only for a first-seen key
    fn insert(&mut self, key: Self::Key, value: Self::Value);

    /// Look up the value sequence recorded for a key
    ///
    /// # Postconditions
    /// - Returns `Some` with the values in insertion order if the key exists
    /// - Returns `None` if the key was never inserted
    /// - Does not modify any state
    fn get(&self, key: &Self::Key) -> Option<&[Self::Value]>;

    /// Enumerate keys in ascending order
    ///
    /// # Postconditions
    /// - Result is strictly ascending
    /// - Result contains exactly the distinct keys ever inserted
    fn keys_in_order(&self) -> Vec<&Self::Key>;

    /// Height of the underlying tree
    ///
    /// # Postconditions
    /// - 0 for an empty index, 1 for a single key
    /// - Computed by traversal, so it reflects the actual shape produced by
    ///   the engine's insertion strategy
    fn tree_height(&self) -> usize;

    /// Enumerate keys stored in childless nodes, in ascending order
    fn leaf_keys(&self) -> Vec<&Self::Key>;

    /// Number of distinct keys
    fn distinct_keys(&self) -> usize;

    /// Number of values across all keys
    fn total_values(&self) -> usize;

    /// Check if the index holds no keys
    fn is_empty(&self) -> bool;
}
