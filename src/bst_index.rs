// Base BST Index Implementation - Stage 2: Contract-First Design
// This implements the OrderedIndex trait over the unbalanced pure tree
// Shares its node layout and read operations with the AVL engine

use crate::contracts::OrderedIndex;
use crate::pure::tree;

/// Unbalanced ordered multimap index
///
/// Inserts without rebalancing, so the shape depends entirely on insertion
/// order: random orders stay roughly logarithmic while sorted input
/// degenerates into a chain. Reads are identical to [`crate::AvlIndex`];
/// only the insertion strategy differs.
pub struct BstIndex<K: Ord, V> {
    root: tree::TreeRoot<K, V>,
}

impl<K: Ord, V> BstIndex<K, V> {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            root: tree::create_empty_tree(),
        }
    }

    /// Check the search-tree invariants (for testing)
    pub fn is_valid(&self) -> bool {
        tree::is_valid_tree(&self.root)
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

impl<K: Ord, V> Default for BstIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> OrderedIndex for BstIndex<K, V> {
    type Key = K;
    type Value = V;

    fn insert(&mut self, key: K, value: V) {
        let root = std::mem::take(&mut self.root);
        self.root = tree::insert_unbalanced_into_tree(root, key, value);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut index = BstIndex::new();
        index.insert("banana", "json.8");
        index.insert("banana", "json.10");
        index.insert("apple", "json.2");

        assert_eq!(index.get(&"banana"), Some(&["json.8", "json.10"][..]));
        assert_eq!(index.get(&"apple"), Some(&["json.2"][..]));
        assert_eq!(index.get(&"cherry"), None);
        assert_eq!(index.distinct_keys(), 2);
        assert_eq!(index.total_values(), 3);
    }

    #[test]
    fn test_sorted_input_degenerates() {
        let mut index = BstIndex::new();
        for key in 1..=16 {
            index.insert(key, ());
        }

        assert_eq!(index.tree_height(), 16);
        assert_eq!(index.leaf_keys(), vec![&16]);
        assert_eq!(index.keys_in_order().len(), 16);
        assert!(index.is_valid());
    }

    #[test]
    fn test_reads_match_insertion_independent_semantics() {
        let mut index = BstIndex::new();
        for key in [50, 20, 80, 10, 30] {
            index.insert(key, key * 10);
        }

        assert_eq!(index.keys_in_order(), vec![&10, &20, &30, &50, &80]);
        assert_eq!(index.leaf_keys(), vec![&10, &30, &80]);
        assert_eq!(index.tree_height(), 3);
        assert!(index.is_valid());
    }
}
