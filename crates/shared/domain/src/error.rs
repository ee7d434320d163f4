//! Domain-level errors.
//!
//! These errors represent business rule violations raised while building or
//! mutating entities. They are independent of HTTP and database concerns.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("{0}")]
    Validation(String),

    /// The password could not be turned into a hash
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
