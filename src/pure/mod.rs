// Pure Functions Module - Stage 3: Pure Function Modularization
// All algorithms implemented as side-effect-free functions

pub mod avl;
pub mod tree;

pub use tree::{
    check_tree_invariants, count_nodes, count_values, create_empty_tree, create_node,
    entries_in_order, find_values, height, insert_unbalanced, insert_unbalanced_into_tree,
    is_valid_tree, keys_in_order, leaf_keys, tree_height, Link, TreeNode, TreeRoot,
};

pub use avl::{
    balance_factor, check_avl_invariants, insert_into_tree, insert_recursive, is_valid_avl,
    rotate_left, rotate_right,
};
