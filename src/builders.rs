// Builder Patterns - Stage 6: Component Library
// This module provides fluent builder APIs for constructing index
// configuration with sensible defaults and validation built in.

use anyhow::Result;

use crate::validation;

/// Index configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Name used for metrics attribution
    pub name: String,
    /// Bucket count for the hash engine
    pub bucket_count: usize,
}

/// Index configuration builder
pub struct IndexConfigBuilder {
    name: Option<String>,
    bucket_count: usize,
}

impl IndexConfigBuilder {
    /// Default number of hash buckets
    pub const DEFAULT_BUCKET_COUNT: usize = 64;

    /// Create a new index config builder
    pub fn new() -> Self {
        Self {
            name: None,
            bucket_count: Self::DEFAULT_BUCKET_COUNT,
        }
    }

    /// Set index name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the hash bucket count
    pub fn bucket_count(mut self, count: usize) -> Result<Self> {
        validation::index::validate_bucket_count(count)?;
        self.bucket_count = count;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<IndexConfig> {
        let name = self
            .name
            .ok_or_else(|| anyhow::anyhow!("Index name is required"))?;
        validation::index::validate_index_name(&name)?;

        Ok(IndexConfig {
            name,
            bucket_count: self.bucket_count,
        })
    }
}

impl Default for IndexConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
