// Ordered Multimap Tree - Pure Functions
// Shared node layout and read-side traversals for the tree-backed indices
// All functions are pure (no side effects, deterministic)

use anyhow::{bail, Result};
use std::cmp::Ordering;

/// Owned link to an optional subtree
pub type Link<K, V> = Option<Box<TreeNode<K, V>>>;

/// Binary search tree node holding one key and every value recorded for it
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<K, V> {
    pub key: K,
    /// Values in insertion order, never deduplicated
    pub values: Vec<V>,
    pub left: Link<K, V>,
    pub right: Link<K, V>,
    /// Height of the subtree rooted here, 1 for a leaf
    pub height: usize,
}

/// Tree root wrapper
#[derive(Debug, Clone)]
pub struct TreeRoot<K, V> {
    pub root: Link<K, V>,
    pub distinct_keys: usize,
    pub total_values: usize,
}

impl<K, V> Default for TreeRoot<K, V> {
    fn default() -> Self {
        create_empty_tree()
    }
}

impl<K, V> TreeNode<K, V> {
    /// Check if node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of values recorded for this key
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

/// Create an empty tree
pub fn create_empty_tree<K, V>() -> TreeRoot<K, V> {
    TreeRoot {
        root: None,
        distinct_keys: 0,
        total_values: 0,
    }
}

/// Create a detached leaf node holding a single value
pub fn create_node<K, V>(key: K, value: V) -> Box<TreeNode<K, V>> {
    Box::new(TreeNode {
        key,
        values: vec![value],
        left: None,
        right: None,
        height: 1,
    })
}

/// Stored height of a subtree, 0 for an absent link
///
/// Reads the maintained height field only; see [`tree_height`] for the
/// traversal-based computation.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Look up the value sequence recorded for a key
pub fn find_values<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a [V]> {
    let mut current = link.as_ref()?;

    loop {
        match key.cmp(&current.key) {
            Ordering::Less => current = current.left.as_ref()?,
            Ordering::Greater => current = current.right.as_ref()?,
            Ordering::Equal => return Some(&current.values),
        }
    }
}

/// Enumerate keys in ascending order
pub fn keys_in_order<K, V>(link: &Link<K, V>) -> Vec<&K> {
    let mut keys = Vec::new();
    collect_keys_in_order(link, &mut keys);
    keys
}

fn collect_keys_in_order<'a, K, V>(link: &'a Link<K, V>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link {
        collect_keys_in_order(&node.left, keys);
        keys.push(&node.key);
        collect_keys_in_order(&node.right, keys);
    }
}

/// Enumerate key-value-sequence pairs in ascending key order
pub fn entries_in_order<K, V>(link: &Link<K, V>) -> Vec<(&K, &[V])> {
    let mut entries = Vec::new();
    collect_entries_in_order(link, &mut entries);
    entries
}

fn collect_entries_in_order<'a, K, V>(link: &'a Link<K, V>, entries: &mut Vec<(&'a K, &'a [V])>) {
    if let Some(node) = link {
        collect_entries_in_order(&node.left, entries);
        entries.push((&node.key, node.values.as_slice()));
        collect_entries_in_order(&node.right, entries);
    }
}

/// Compute tree height by full traversal
///
/// Independent of the stored height fields, so it answers correctly for any
/// shape an insertion strategy produces.
pub fn tree_height<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + tree_height(&node.left).max(tree_height(&node.right)),
    }
}

/// Enumerate keys of childless nodes in ascending order
pub fn leaf_keys<K, V>(link: &Link<K, V>) -> Vec<&K> {
    let mut keys = Vec::new();
    collect_leaf_keys(link, &mut keys);
    keys
}

fn collect_leaf_keys<'a, K, V>(link: &'a Link<K, V>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link {
        collect_leaf_keys(&node.left, keys);
        if node.is_leaf() {
            keys.push(&node.key);
        }
        collect_leaf_keys(&node.right, keys);
    }
}

/// Count distinct keys by traversal (for testing)
pub fn count_nodes<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count_nodes(&node.left) + count_nodes(&node.right),
    }
}

/// Count stored values across all keys (for testing)
pub fn count_values<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(node) => node.values.len() + count_values(&node.left) + count_values(&node.right),
    }
}

/// Recursive insert without rebalancing
///
/// Returns the subtree root, which changes only when the subtree was empty.
/// A duplicate key appends to the node's value list and leaves structure and
/// heights untouched.
pub fn insert_unbalanced<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> Box<TreeNode<K, V>> {
    let mut current = match link {
        None => return create_node(key, value),
        Some(node) => node,
    };

    match key.cmp(&current.key) {
        Ordering::Less => {
            current.left = Some(insert_unbalanced(current.left.take(), key, value));
        }
        Ordering::Greater => {
            current.right = Some(insert_unbalanced(current.right.take(), key, value));
        }
        Ordering::Equal => {
            current.values.push(value);
            return current;
        }
    }

    current.height = 1 + height(&current.left).max(height(&current.right));
    current
}

/// Insert a key-value pair without rebalancing
pub fn insert_unbalanced_into_tree<K: Ord, V>(
    mut root: TreeRoot<K, V>,
    key: K,
    value: V,
) -> TreeRoot<K, V> {
    // Special case: empty tree
    if root.root.is_none() {
        root.root = Some(create_node(key, value));
        root.distinct_keys = 1;
        root.total_values = 1;
        return root;
    }

    // Check if key already exists
    let exists = find_values(&root.root, &key).is_some();

    root.root = Some(insert_unbalanced(root.root.take(), key, value));

    if !exists {
        root.distinct_keys += 1;
    }
    root.total_values += 1;

    root
}

/// Check if tree maintains search-tree invariants (for testing)
pub fn is_valid_tree<K: Ord, V>(root: &TreeRoot<K, V>) -> bool {
    check_tree_invariants(&root.root).is_ok()
}

/// Check ordering, stored heights, and value presence recursively
pub fn check_tree_invariants<K: Ord, V>(link: &Link<K, V>) -> Result<()> {
    check_node_invariants(link, None, None)?;
    Ok(())
}

fn check_node_invariants<'a, K: Ord, V>(
    link: &'a Link<K, V>,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
) -> Result<usize> {
    let Some(node) = link else {
        return Ok(0);
    };

    if let Some(bound) = lower {
        if node.key <= *bound {
            bail!("Keys not in sorted order: left subtree bound violated");
        }
    }
    if let Some(bound) = upper {
        if node.key >= *bound {
            bail!("Keys not in sorted order: right subtree bound violated");
        }
    }
    if node.values.is_empty() {
        bail!("Node holds a key with no values");
    }

    let left_height = check_node_invariants(&node.left, lower, Some(&node.key))?;
    let right_height = check_node_invariants(&node.right, Some(&node.key), upper)?;

    let expected = 1 + left_height.max(right_height);
    if node.height != expected {
        bail!(
            "Stored height {} does not match computed height {}",
            node.height,
            expected
        );
    }

    Ok(expected)
}
