// AVL Rebalancing - Pure Functions
// Height-balanced insertion over the shared tree node layout
// All functions are pure (no side effects, deterministic)

use anyhow::{bail, Result};
use std::cmp::Ordering;

use crate::pure::tree::{create_node, find_values, height, Link, TreeNode, TreeRoot};

/// Balance factor of a subtree: stored left height minus stored right height
///
/// 0 for an absent link. A positive factor means left-heavy, negative means
/// right-heavy; the tree is balanced when every node's factor is in [-1, 1].
pub fn balance_factor<K, V>(link: &Link<K, V>) -> i64 {
    link.as_ref().map_or(0, |node| node_balance(node))
}

fn node_balance<K, V>(node: &TreeNode<K, V>) -> i64 {
    height(&node.left) as i64 - height(&node.right) as i64
}

/// Rotate the subtree rooted at `y` to the right, returning the new root
///
/// `y.left` must exist; the balance guards in [`insert_recursive`] guarantee
/// it, and a violation means the structure is already corrupt. Reassigns
/// ownership of three links and recomputes two heights, O(1).
pub fn rotate_right<K, V>(mut y: Box<TreeNode<K, V>>) -> Box<TreeNode<K, V>> {
    let mut a = y.left.take().expect("rotate_right requires a left child");

    y.left = a.right.take();
    y.height = 1 + height(&y.left).max(height(&y.right));

    a.right = Some(y);
    a.height = 1 + height(&a.left).max(height(&a.right));
    a
}

/// Rotate the subtree rooted at `x` to the left, returning the new root
///
/// Mirror image of [`rotate_right`]; `x.right` must exist.
pub fn rotate_left<K, V>(mut x: Box<TreeNode<K, V>>) -> Box<TreeNode<K, V>> {
    let mut b = x.right.take().expect("rotate_left requires a right child");

    x.right = b.left.take();
    x.height = 1 + height(&x.left).max(height(&x.right));

    b.left = Some(x);
    b.height = 1 + height(&b.left).max(height(&b.right));
    b
}

/// Recursive balancing insert
///
/// Returns the subtree root after insertion, which changes only when a
/// rotation promotes a different node. A duplicate key appends to the
/// node's value list and returns immediately, skipping height maintenance
/// and rebalancing entirely.
pub fn insert_recursive<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> Box<TreeNode<K, V>> {
    let mut current = match link {
        None => return create_node(key, value),
        Some(node) => node,
    };

    match key.cmp(&current.key) {
        Ordering::Less => {
            current.left = Some(insert_recursive(current.left.take(), key, value));
        }
        Ordering::Greater => {
            current.right = Some(insert_recursive(current.right.take(), key, value));
        }
        Ordering::Equal => {
            current.values.push(value);
            return current;
        }
    }

    current.height = 1 + height(&current.left).max(height(&current.right));
    let balance = node_balance(&current);

    // Left-Left: single right rotation
    if balance > 1 && balance_factor(&current.left) >= 0 {
        return rotate_right(current);
    }

    // Right-Right: single left rotation
    if balance < -1 && balance_factor(&current.right) <= 0 {
        return rotate_left(current);
    }

    // Left-Right: rotate left child left, then rotate right
    if balance > 1 && balance_factor(&current.left) < 0 {
        let left = current
            .left
            .take()
            .expect("left-heavy node requires a left child");
        current.left = Some(rotate_left(left));
        return rotate_right(current);
    }

    // Right-Left: rotate right child right, then rotate left
    if balance < -1 && balance_factor(&current.right) > 0 {
        let right = current
            .right
            .take()
            .expect("right-heavy node requires a right child");
        current.right = Some(rotate_right(right));
        return rotate_left(current);
    }

    current
}

/// Insert a key-value pair, rebalancing along the insertion path
pub fn insert_into_tree<K: Ord, V>(mut root: TreeRoot<K, V>, key: K, value: V) -> TreeRoot<K, V> {
    // Special case: empty tree
    if root.root.is_none() {
        root.root = Some(create_node(key, value));
        root.distinct_keys = 1;
        root.total_values = 1;
        return root;
    }

    // Check if key already exists
    let exists = find_values(&root.root, &key).is_some();

    root.root = Some(insert_recursive(root.root.take(), key, value));

    if !exists {
        root.distinct_keys += 1;
    }
    root.total_values += 1;

    root
}

/// Check if tree maintains AVL invariants (for testing)
pub fn is_valid_avl<K: Ord, V>(root: &TreeRoot<K, V>) -> bool {
    check_avl_invariants(&root.root).is_ok()
}

/// Check ordering, stored heights, and balance factors recursively
pub fn check_avl_invariants<K: Ord, V>(link: &Link<K, V>) -> Result<()> {
    crate::pure::tree::check_tree_invariants(link)?;
    check_balance_factors(link)
}

fn check_balance_factors<K, V>(link: &Link<K, V>) -> Result<()> {
    if let Some(node) = link {
        let balance = node_balance(node);
        if !(-1..=1).contains(&balance) {
            bail!("Balance factor {} outside [-1, 1]", balance);
        }
        check_balance_factors(&node.left)?;
        check_balance_factors(&node.right)?;
    }
    Ok(())
}
