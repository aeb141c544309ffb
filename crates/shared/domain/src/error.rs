//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::constants::ENTITY_EMPLOYEE;
use crate::validation::FieldViolations;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// One or more fields failed the shared rule set
    #[error("Validation error: {0}")]
    Validation(FieldViolations),

    /// Entity already exists (conflict)
    #[error("{0} already exists")]
    Conflict(String),
}

impl DomainError {
    /// Conflict raised when the business identifier or email is already taken.
    ///
    /// Both the duplicate pre-check and the store's unique constraint report this value.
    pub fn duplicate_employee() -> Self {
        DomainError::Conflict(ENTITY_EMPLOYEE.to_string())
    }
}

impl From<FieldViolations> for DomainError {
    fn from(violations: FieldViolations) -> Self {
        DomainError::Validation(violations)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
