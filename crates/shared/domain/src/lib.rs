//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The employee rule set lives here so the service and the form validate
//! submissions identically.

pub mod constants;
pub mod employee;
pub mod error;
pub mod message;
pub mod validation;

pub use constants::*;
pub use employee::{Employee, EmployeeSubmission, NewEmployee};
pub use error::{DomainError, DomainResult};
pub use message::ApiMessage;
pub use validation::{parse_date, today, FieldViolation, FieldViolations};
