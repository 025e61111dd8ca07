// Validated Types - Stage 6: Component Library
// This module provides strongly-typed wrappers that enforce invariants at compile time.
// These types cannot be constructed with invalid data, eliminating entire classes of bugs.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document term that has been validated and is guaranteed to be indexable
///
/// Terms order lexicographically by their byte representation, which is the
/// total order the tree indices sort by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ValidatedTerm {
    inner: String,
}

impl ValidatedTerm {
    /// Create a new validated term
    ///
    /// # Invariants
    /// - Non-empty after trimming
    /// - Length <= 256 bytes
    /// - Single token: no interior whitespace
    /// - No control characters
    pub fn new(term: impl Into<String>) -> Result<Self> {
        let term = term.into();
        crate::validation::term::validate_term(&term)?;

        Ok(Self {
            inner: term.trim().to_string(),
        })
    }

    /// Get the term as a string slice
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for ValidatedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// A reference locating a document, e.g. `json.8` or `docs/report_14.json`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    inner: String,
}

impl DocumentRef {
    /// Create a new document reference
    ///
    /// # Invariants
    /// - Non-empty
    /// - Length <= 4096 bytes
    /// - No null bytes
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        let reference = reference.into();
        crate::validation::document_ref::validate_document_ref(&reference)?;

        Ok(Self { inner: reference })
    }

    /// Get the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
