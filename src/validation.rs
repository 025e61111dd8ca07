// Validation Layer - Stage 2: Contract Enforcement
// This module provides runtime validation of index inputs and configuration
// ensuring that preconditions and postconditions are met

use anyhow::{bail, Result};
use std::collections::HashMap;

/// Validation errors with detailed context
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Precondition failed: {condition}")]
    PreconditionFailed { condition: String, context: String },

    #[error("Postcondition failed: {condition}")]
    PostconditionFailed { condition: String, context: String },

    #[error("Invariant violated: {invariant}")]
    InvariantViolated { invariant: String, state: String },

    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Validation context for better error messages
#[derive(Clone)]
pub struct ValidationContext {
    operation: String,
    attributes: HashMap<String, String>,
}

impl ValidationContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn validate(self, condition: bool, message: &str) -> Result<()> {
        if !condition {
            let context = format!(
                "Operation: {}, Attributes: {:?}",
                self.operation, self.attributes
            );
            bail!(ValidationError::PreconditionFailed {
                condition: message.to_string(),
                context,
            });
        }
        Ok(())
    }
}

/// Term validation with detailed checks
pub mod term {
    use super::*;

    /// Maximum term length in bytes
    const MAX_TERM_LENGTH: usize = 256;

    /// Validate a term for indexing
    pub fn validate_term(term: &str) -> Result<()> {
        let ctx = ValidationContext::new("validate_term").with_attribute("term", term);

        // Check empty
        ctx.clone()
            .validate(!term.trim().is_empty(), "Term cannot be empty")?;

        // Check length
        ctx.clone().validate(
            term.len() <= MAX_TERM_LENGTH,
            &format!("Term exceeds maximum length of {MAX_TERM_LENGTH}"),
        )?;

        // A term is a single token
        ctx.clone().validate(
            !term.trim().chars().any(char::is_whitespace),
            "Term cannot contain whitespace",
        )?;

        // Check for control characters (covers null bytes)
        ctx.validate(
            !term.chars().any(char::is_control),
            "Term cannot contain control characters",
        )?;

        Ok(())
    }
}

/// Document reference validation
pub mod document_ref {
    use super::*;

    /// Maximum reference length in bytes
    const MAX_REFERENCE_LENGTH: usize = 4096;

    /// Validate a document reference for storage in an index
    pub fn validate_document_ref(reference: &str) -> Result<()> {
        let ctx =
            ValidationContext::new("validate_document_ref").with_attribute("reference", reference);

        // Check empty
        ctx.clone()
            .validate(!reference.is_empty(), "Document reference cannot be empty")?;

        // Check length
        ctx.clone().validate(
            reference.len() <= MAX_REFERENCE_LENGTH,
            &format!("Document reference exceeds maximum length of {MAX_REFERENCE_LENGTH}"),
        )?;

        // Check for null bytes
        ctx.validate(
            !reference.contains('\0'),
            "Document reference contains null bytes",
        )?;

        Ok(())
    }
}

/// Index configuration validation
pub mod index {
    use super::*;

    /// Upper bound keeps bucket allocation sane
    const MAX_BUCKET_COUNT: usize = 1 << 24;

    /// Maximum index name length
    const MAX_NAME_LENGTH: usize = 128;

    /// Validate a hash index bucket count
    pub fn validate_bucket_count(count: usize) -> Result<()> {
        let ctx = ValidationContext::new("validate_bucket_count")
            .with_attribute("count", count.to_string());

        ctx.clone()
            .validate(count > 0, "Bucket count must be positive")?;

        ctx.validate(
            count <= MAX_BUCKET_COUNT,
            &format!("Bucket count exceeds maximum of {MAX_BUCKET_COUNT}"),
        )?;

        Ok(())
    }

    /// Validate an index name used for metrics attribution
    pub fn validate_index_name(name: &str) -> Result<()> {
        let ctx = ValidationContext::new("validate_index_name").with_attribute("name", name);

        ctx.clone()
            .validate(!name.trim().is_empty(), "Index name cannot be empty")?;

        ctx.clone().validate(
            name.len() <= MAX_NAME_LENGTH,
            &format!("Index name exceeds maximum length of {MAX_NAME_LENGTH}"),
        )?;

        ctx.validate(
            !name.chars().any(char::is_control),
            "Index name cannot contain control characters",
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_validation() {
        // Valid terms
        assert!(term::validate_term("banana").is_ok());
        assert!(term::validate_term("avl-tree").is_ok());
        assert!(term::validate_term("r2d2").is_ok());

        // Invalid terms
        assert!(term::validate_term("").is_err());
        assert!(term::validate_term("   ").is_err());
        assert!(term::validate_term("two words").is_err());
        assert!(term::validate_term("line\nbreak").is_err());
        assert!(term::validate_term("nul\0byte").is_err());

        // Term too long
        let long_term = "x".repeat(300);
        assert!(term::validate_term(&long_term).is_err());
    }

    #[test]
    fn test_document_ref_validation() {
        // Valid references
        assert!(document_ref::validate_document_ref("json.8").is_ok());
        assert!(document_ref::validate_document_ref("docs/report_14.json").is_ok());

        // Invalid references
        assert!(document_ref::validate_document_ref("").is_err());
        assert!(document_ref::validate_document_ref("bad\0ref").is_err());

        let long_ref = "x".repeat(5000);
        assert!(document_ref::validate_document_ref(&long_ref).is_err());
    }

    #[test]
    fn test_bucket_count_validation() {
        assert!(index::validate_bucket_count(1).is_ok());
        assert!(index::validate_bucket_count(1024).is_ok());

        assert!(index::validate_bucket_count(0).is_err());
        assert!(index::validate_bucket_count(usize::MAX).is_err());
    }

    #[test]
    fn test_index_name_validation() {
        assert!(index::validate_index_name("primary_terms").is_ok());

        assert!(index::validate_index_name("").is_err());
        assert!(index::validate_index_name("   ").is_err());
        assert!(index::validate_index_name("bad\tname").is_err());
        assert!(index::validate_index_name(&"x".repeat(200)).is_err());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidInput {
            field: "term".to_string(),
            reason: "contains whitespace".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input: term - contains whitespace");
    }

    #[test]
    fn test_validation_context_attributes_in_error() {
        let result = ValidationContext::new("test_op")
            .with_attribute("key", "10")
            .validate(false, "always fails");

        let err = result.unwrap_err();
        let validation_err = err
            .downcast_ref::<ValidationError>()
            .expect("typed validation error");
        match validation_err {
            ValidationError::PreconditionFailed { condition, context } => {
                assert_eq!(condition, "always fails");
                assert!(context.contains("test_op"));
                assert!(context.contains("key"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
