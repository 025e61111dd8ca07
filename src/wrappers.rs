// Wrapper Components - Stage 6: Component Library
// This module provides high-level wrappers that automatically apply best
// practices like metrics collection and contract checking.

use anyhow::Result;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::avl_index::AvlIndex;
use crate::bst_index::BstIndex;
use crate::builders::IndexConfig;
use crate::contracts::OrderedIndex;
use crate::hash_index::HashTableIndex;
use crate::observability::{
    log_error_with_context, log_operation, record_metric, MetricType, Operation, OperationContext,
};
use crate::validation;

/// Index wrapper with automatic metrics collection
///
/// Every trait operation is timed into the per-operation histogram and
/// emitted as a structured operation record, so the global counters in
/// `observability::get_metrics` track index load.
pub struct MeteredIndex<I: OrderedIndex> {
    inner: I,
    name: String,
    operation_timings: Arc<Mutex<HashMap<String, Vec<Duration>>>>,
}

impl<I: OrderedIndex> MeteredIndex<I> {
    /// Create a new metered index
    pub fn new(inner: I, name: String) -> Self {
        Self {
            inner,
            name,
            operation_timings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Name used for metrics attribution
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record operation timing
    fn record_timing(&self, operation: &str, duration: Duration) {
        let mut timings = self.operation_timings.lock();
        timings
            .entry(operation.to_string())
            .or_default()
            .push(duration);

        record_metric(MetricType::Histogram {
            name: "index.operation.duration",
            value: duration.as_millis() as f64,
            unit: "ms",
        });
    }

    /// Get timing statistics as (min, avg, max) per operation
    pub fn timing_stats(&self) -> HashMap<String, (Duration, Duration, Duration)> {
        let timings = self.operation_timings.lock();
        let mut stats = HashMap::new();

        for (op, durations) in timings.iter() {
            if !durations.is_empty() {
                let sum: Duration = durations.iter().sum();
                let avg = sum / durations.len() as u32;
                let min = *durations.iter().min().expect("non-empty timing list");
                let max = *durations.iter().max().expect("non-empty timing list");
                stats.insert(op.clone(), (min, avg, max));
            }
        }

        stats
    }

    /// Log accumulated timings and unwrap the engine
    pub fn into_inner(self) -> I {
        for (op, (min, avg, max)) in self.timing_stats() {
            info!(
                "Index timing for {} {}: min={:?}, avg={:?}, max={:?}",
                self.name, op, min, avg, max
            );
        }
        self.inner
    }
}

impl<I: OrderedIndex> OrderedIndex for MeteredIndex<I>
where
    I::Key: Debug,
{
    type Key = I::Key;
    type Value = I::Value;

    fn insert(&mut self, key: I::Key, value: I::Value) {
        let ctx = OperationContext::new("index.insert");
        let term = format!("{key:?}");
        self.inner.insert(key, value);
        self.record_timing("insert", ctx.elapsed());

        log_operation(
            &ctx,
            &Operation::IndexInsert {
                index_type: self.name.clone(),
                term,
            },
            &Ok(()),
        );
    }

    fn get(&self, key: &I::Key) -> Option<&[I::Value]> {
        let mut ctx = OperationContext::new("index.get");
        let result = self.inner.get(key);
        self.record_timing("get", ctx.elapsed());

        let value_count = result.map_or(0, <[I::Value]>::len);
        ctx.add_attribute("found", (value_count > 0).to_string());
        log_operation(
            &ctx,
            &Operation::IndexLookup {
                index_type: self.name.clone(),
                term: format!("{key:?}"),
                value_count,
            },
            &Ok(()),
        );
        result
    }

    fn keys_in_order(&self) -> Vec<&I::Key> {
        let ctx = OperationContext::new("index.keys_in_order");
        let result = self.inner.keys_in_order();
        self.record_timing("keys_in_order", ctx.elapsed());

        log_operation(
            &ctx,
            &Operation::IndexTraversal {
                index_type: self.name.clone(),
                key_count: result.len(),
            },
            &Ok(()),
        );
        result
    }

    fn tree_height(&self) -> usize {
        let start = Instant::now();
        let result = self.inner.tree_height();
        self.record_timing("tree_height", start.elapsed());
        result
    }

    fn leaf_keys(&self) -> Vec<&I::Key> {
        let ctx = OperationContext::new("index.leaf_keys");
        let result = self.inner.leaf_keys();
        self.record_timing("leaf_keys", ctx.elapsed());

        log_operation(
            &ctx,
            &Operation::IndexTraversal {
                index_type: self.name.clone(),
                key_count: result.len(),
            },
            &Ok(()),
        );
        result
    }

    fn distinct_keys(&self) -> usize {
        self.inner.distinct_keys()
    }

    fn total_values(&self) -> usize {
        self.inner.total_values()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Index wrapper that checks insert postconditions after every mutation
///
/// Intended for tests and development builds. A violated postcondition means
/// the wrapped engine broke its contract, so this wrapper halts the process
/// rather than continue on a corrupt index.
pub struct ValidatedIndex<I: OrderedIndex> {
    inner: I,
}

impl<I: OrderedIndex> ValidatedIndex<I> {
    /// Wrap an index implementation with contract checking
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Unwrap the engine
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: OrderedIndex> OrderedIndex for ValidatedIndex<I>
where
    I::Key: Clone,
{
    type Key = I::Key;
    type Value = I::Value;

    fn insert(&mut self, key: I::Key, value: I::Value) {
        let lookup_key = key.clone();
        let was_present = self.inner.get(&lookup_key).is_some();
        let distinct_before = self.inner.distinct_keys();
        let total_before = self.inner.total_values();

        self.inner.insert(key, value);

        let values = self.inner.get(&lookup_key);
        assert!(
            values.is_some_and(|v| !v.is_empty()),
            "inserted key must be findable"
        );
        assert_eq!(
            self.inner.total_values(),
            total_before + 1,
            "total value count must grow by exactly one"
        );
        let expected_distinct = if was_present {
            distinct_before
        } else {
            distinct_before + 1
        };
        assert_eq!(
            self.inner.distinct_keys(),
            expected_distinct,
            "distinct key count must grow only for first-seen keys"
        );
    }

    fn get(&self, key: &I::Key) -> Option<&[I::Value]> {
        self.inner.get(key)
    }

    fn keys_in_order(&self) -> Vec<&I::Key> {
        self.inner.keys_in_order()
    }

    fn tree_height(&self) -> usize {
        self.inner.tree_height()
    }

    fn leaf_keys(&self) -> Vec<&I::Key> {
        self.inner.leaf_keys()
    }

    fn distinct_keys(&self) -> usize {
        self.inner.distinct_keys()
    }

    fn total_values(&self) -> usize {
        self.inner.total_values()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Create a metered AVL index
///
/// This is the recommended way to create a production balanced index. It
/// automatically applies the Stage 6 MeteredIndex wrapper for metrics.
pub fn create_avl_index<K: Ord + Debug, V>(name: &str) -> Result<MeteredIndex<AvlIndex<K, V>>> {
    let ctx = OperationContext::new("index.create");
    if let Err(e) = validation::index::validate_index_name(name) {
        log_error_with_context(&e, &ctx);
        return Err(e);
    }
    Ok(MeteredIndex::new(AvlIndex::new(), name.to_string()))
}

/// Create a metered base BST index
///
/// Useful as a comparison baseline; for production ordered lookups prefer
/// [`create_avl_index`], which keeps worst-case operations logarithmic.
pub fn create_bst_index<K: Ord + Debug, V>(name: &str) -> Result<MeteredIndex<BstIndex<K, V>>> {
    let ctx = OperationContext::new("index.create");
    if let Err(e) = validation::index::validate_index_name(name) {
        log_error_with_context(&e, &ctx);
        return Err(e);
    }
    Ok(MeteredIndex::new(BstIndex::new(), name.to_string()))
}

/// Create a hash index from a validated configuration
pub fn create_hash_index<K: Hash + Eq, V>(config: &IndexConfig) -> Result<HashTableIndex<K, V>> {
    let index = HashTableIndex::new(config.bucket_count)?;
    debug!(
        "Created hash index '{}' with {} buckets",
        config.name, config.bucket_count
    );
    Ok(index)
}
