// Hash Table Index Implementation - Stage 2: Contract-First Design
// Fixed-bucket chained multimap, independent of the ordered tree engines

use anyhow::Result;
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

use crate::validation;

/// Chained-bucket hash multimap index
///
/// The bucket count is fixed at construction and entries chain within their
/// bucket, scanned linearly. Duplicate keys append to the entry's value
/// sequence. Offers no ordering guarantees; ordered enumeration is what the
/// tree engines are for.
pub struct HashTableIndex<K, V> {
    buckets: Vec<Vec<HashEntry<K, V>>>,
    distinct_keys: usize,
    total_values: usize,
}

#[derive(Debug, Clone)]
struct HashEntry<K, V> {
    key: K,
    values: Vec<V>,
}

/// Bucket occupancy snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketStats {
    pub bucket_count: usize,
    pub occupied_buckets: usize,
    pub max_entries_per_bucket: usize,
}

impl<K: Hash + Eq, V> HashTableIndex<K, V> {
    /// Create an index with a fixed number of buckets
    pub fn new(bucket_count: usize) -> Result<Self> {
        validation::index::validate_bucket_count(bucket_count)?;

        Ok(Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            distinct_keys: 0,
            total_values: 0,
        })
    }

    fn bucket_for(&self, key: &K) -> usize {
        let mut hasher = Xxh3::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Insert a key-value pair
    ///
    /// A first-seen key claims a new entry in its bucket; a duplicate key
    /// appends to the existing entry's value sequence in insertion order.
    pub fn insert(&mut self, key: K, value: V) {
        let slot = self.bucket_for(&key);
        let bucket = &mut self.buckets[slot];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            entry.values.push(value);
        } else {
            bucket.push(HashEntry {
                key,
                values: vec![value],
            });
            self.distinct_keys += 1;
        }
        self.total_values += 1;
    }

    /// Look up the value sequence recorded for a key
    pub fn get(&self, key: &K) -> Option<&[V]> {
        let slot = self.bucket_for(key);
        self.buckets[slot]
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.values.as_slice())
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove a key and all its values, returning whether it existed
    pub fn remove(&mut self, key: &K) -> bool {
        let slot = self.bucket_for(key);
        let bucket = &mut self.buckets[slot];

        match bucket.iter().position(|entry| entry.key == *key) {
            Some(position) => {
                let entry = bucket.remove(position);
                self.distinct_keys -= 1;
                self.total_values -= entry.values.len();
                true
            }
            None => false,
        }
    }

    /// Number of distinct keys
    pub fn distinct_keys(&self) -> usize {
        self.distinct_keys
    }

    /// Number of values across all keys
    pub fn total_values(&self) -> usize {
        self.total_values
    }

    /// Number of buckets fixed at construction
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Check if the index holds no keys
    pub fn is_empty(&self) -> bool {
        self.distinct_keys == 0
    }

    /// Summarize bucket occupancy (for diagnostics)
    pub fn bucket_stats(&self) -> BucketStats {
        BucketStats {
            bucket_count: self.buckets.len(),
            occupied_buckets: self.buckets.iter().filter(|b| !b.is_empty()).count(),
            max_entries_per_bucket: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}
