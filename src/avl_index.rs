// AVL Index Implementation - Stage 2: Contract-First Design
// This implements the OrderedIndex trait over the height-balanced pure tree
// Designed to work with the Stage 6 component library wrappers

use crate::contracts::OrderedIndex;
use crate::pure::{avl, tree};

/// Height-balanced ordered multimap index
///
/// Every insertion maintains per-node heights and applies at most one
/// rotation case, so lookups and traversals stay O(log n) regardless of
/// insertion order. It should be used with the Stage 6 MeteredIndex wrapper
/// for production use.
pub struct AvlIndex<K: Ord, V> {
    root: tree::TreeRoot<K, V>,
}

impl<K: Ord, V> AvlIndex<K, V> {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            root: tree::create_empty_tree(),
        }
    }

    /// Check the balanced-tree invariants (for testing)
    pub fn is_valid(&self) -> bool {
        avl::is_valid_avl(&self.root)
    }

    /// Borrow the underlying tree (for diagnostics and testing)
    pub fn as_tree(&self) -> &tree::TreeRoot<K, V> {
        &self.root
    }

    /// Enumerate key-value-sequence pairs in ascending key order
    pub fn entries_in_order(&self) -> Vec<(&K, &[V])> {
        tree::entries_in_order(&self.root.root)
    }
}

impl<K: Ord, V> Default for AvlIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> OrderedIndex for AvlIndex<K, V> {
    type Key = K;
    type Value = V;

    fn insert(&mut self, key: K, value: V) {
        let root = std::mem::take(&mut self.root);
        self.root = avl::insert_into_tree(root, key, value);
    }

    fn get(&self, key: &K) -> Option<&[V]> {
        tree::find_values(&self.root.root, key)
    }

    fn keys_in_order(&self) -> Vec<&K> {
        tree::keys_in_order(&self.root.root)
    }

    fn tree_height(&self) -> usize {
        tree::tree_height(&self.root.root)
    }

    fn leaf_keys(&self) -> Vec<&K> {
        tree::leaf_keys(&self.root.root)
    }

    fn distinct_keys(&self) -> usize {
        self.root.distinct_keys
    }

    fn total_values(&self) -> usize {
        self.root.total_values
    }

    fn is_empty(&self) -> bool {
        self.root.root.is_none()
    }
}
