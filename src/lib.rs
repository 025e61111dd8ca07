// TermIndex - In-Memory Ordered and Hashed Multimap Indices
// Root library module

pub mod observability;
pub mod contracts;
pub mod validation;
pub mod pure;
pub mod types;
pub mod builders;
pub mod wrappers;
pub mod avl_index;
pub mod bst_index;
pub mod hash_index;

// Re-export key types
pub use observability::{
    init_logging,
    Operation,
    MetricType,
    log_operation,
    record_metric,
    with_trace_id,
};

pub use contracts::OrderedIndex;

// Re-export validated types
pub use types::{
    ValidatedTerm,
    DocumentRef,
};

// Re-export builders
pub use builders::{
    IndexConfig,
    IndexConfigBuilder,
};

// Re-export wrappers
pub use wrappers::{
    MeteredIndex,
    ValidatedIndex,
    create_avl_index,
    create_bst_index,
    create_hash_index,
};

// Re-export index implementations
pub use avl_index::AvlIndex;
pub use bst_index::BstIndex;
pub use hash_index::{BucketStats, HashTableIndex};

// Re-export pure functions
pub use pure::avl;
pub use pure::tree;

// Test modules
#[cfg(test)]
mod avl_test;
