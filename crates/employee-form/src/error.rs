//! Form and client errors.

use chrono::NaiveDate;
use domain::FieldViolations;
use thiserror::Error;

/// Outcome of a submission the service did not accept.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The service rejected one or more fields
    #[error("{message}")]
    Validation {
        message: String,
        errors: FieldViolations,
    },

    /// Employee id or email already taken
    #[error("{0}")]
    Conflict(String),

    /// Any other non-success status with a message body
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Could not reach the employee service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from the employee service (status {status})")]
    InvalidResponse { status: u16 },
}

/// Input refused by the form controls before it reaches a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("No department at position {0}")]
    UnknownDepartment(usize),

    #[error("Cannot be a future date")]
    FutureDate(NaiveDate),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
