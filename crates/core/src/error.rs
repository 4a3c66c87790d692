//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised *before* any state change: an operation that fails
/// with a `DomainError` leaves the inventory exactly as it was. Persistence
/// failures are not domain errors and are reported separately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (negative quantity, empty name, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No product with the given id exists.
    #[error("product not found: {0}")]
    NotFound(String),

    /// A product with the given id already exists.
    #[error("product already exists: {0}")]
    Duplicate(String),

    /// An update carried no field to change.
    #[error("no changes requested for product {0}")]
    NoChanges(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::Duplicate(id.into())
    }

    pub fn no_changes(id: impl Into<String>) -> Self {
        Self::NoChanges(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_id() {
        assert_eq!(
            DomainError::not_found("A-1").to_string(),
            "product not found: A-1"
        );
        assert_eq!(
            DomainError::duplicate("A-1").to_string(),
            "product already exists: A-1"
        );
    }

    #[test]
    fn constructors_map_to_variants() {
        assert!(matches!(
            DomainError::validation("quantity must be non-negative"),
            DomainError::Validation(msg) if msg == "quantity must be non-negative"
        ));
        assert!(matches!(DomainError::no_changes("x"), DomainError::NoChanges(_)));
    }
}
