//! Shared field rules and the violation report built from them.
//!
//! The rules are attached to [`EmployeeSubmission`](crate::EmployeeSubmission) with
//! `validator` derive attributes; the functions here implement the constraints that
//! need more than a length or email check. Both the service and the form consume
//! the same report type.

use std::borrow::Cow;
use std::fmt;

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{ValidateEmail, ValidationError, ValidationErrors};

use crate::constants::{
    DATE_FORMAT, FIELD_ORDER, MAX_EMPLOYEE_ID_LENGTH, MAX_LABEL_LENGTH, MAX_NAME_LENGTH, PHONE_DIGITS,
};

/// Exactly ten ASCII digits (`\d` would also accept non-ASCII digits)
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^[0-9]{{{}}}$", PHONE_DIGITS)).unwrap());

/// A single failed constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldViolation {
    /// Wire name of the field (e.g. `dateOfJoining`)
    #[cfg_attr(feature = "openapi", schema(example = "phone"))]
    pub field: String,
    /// Human-readable message for the form
    #[cfg_attr(feature = "openapi", schema(example = "Must be 10 digits"))]
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every violation found in one submission, in [`FIELD_ORDER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldViolations(Vec<FieldViolation>);

impl FieldViolations {
    /// Build a report, normalising the order so equal inputs give equal reports.
    pub fn new(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by(|a, b| {
            field_rank(&a.field)
                .cmp(&field_rank(&b.field))
                .then_with(|| a.message.cmp(&b.message))
        });
        violations.dedup();
        Self(violations)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    /// Distinct field names that failed, in report order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.0.iter().map(|v| v.field.as_str()).collect();
        fields.dedup();
        fields
    }

    /// Whether the named field has at least one violation
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// First message recorded for the named field
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }

    /// Drop every violation recorded for the named field
    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|v| v.field != field);
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.0
    }
}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<&ValidationErrors> for FieldViolations {
    fn from(errors: &ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                let field = wire_name(&field.to_string());
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldViolation::new(field.clone(), message)
                })
            })
            .collect();

        FieldViolations::new(violations)
    }
}

impl From<ValidationErrors> for FieldViolations {
    fn from(errors: ValidationErrors) -> Self {
        FieldViolations::from(&errors)
    }
}

/// Position of a field in the report; unknown fields sort last.
fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len())
}

/// Convert a Rust field name (`date_of_joining`) to its wire name (`dateOfJoining`).
pub fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Today's date, the upper bound for a date of joining.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a wire date (`YYYY-MM-DD`, zero-padded).
///
/// chrono alone also accepts unpadded, signed or space-prefixed input; only the
/// canonical spelling is a wire date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
}

/// Business identifier: 1 to 10 characters.
pub(crate) fn validate_employee_id(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(violation("required", "EmployeeId cannot be empty"));
    }
    if value.chars().count() > MAX_EMPLOYEE_ID_LENGTH {
        return Err(violation("max_length", "Max 10 characters"));
    }
    Ok(())
}

/// Required text of at most `max` characters.
fn bounded_text(
    value: &str,
    max: usize,
    required: &'static str,
    too_long: &'static str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(violation("required", required));
    }
    if value.chars().count() > max {
        return Err(violation("max_length", too_long));
    }
    Ok(())
}

pub(crate) fn validate_name(value: &str) -> Result<(), ValidationError> {
    bounded_text(value, MAX_NAME_LENGTH, "Name is required", "Max 255 characters")
}

pub(crate) fn validate_department(value: &str) -> Result<(), ValidationError> {
    bounded_text(value, MAX_LABEL_LENGTH, "Department is required", "Max 100 characters")
}

pub(crate) fn validate_role(value: &str) -> Result<(), ValidationError> {
    bounded_text(value, MAX_LABEL_LENGTH, "Role is required", "Max 100 characters")
}

/// Email: valid address with a dotted domain, at most 255 characters.
pub(crate) fn validate_email(value: &str) -> Result<(), ValidationError> {
    let dotted_domain = value
        .rsplit_once('@')
        .map(|(_, domain)| {
            domain
                .split('.')
                .filter(|label| !label.is_empty())
                .count()
                >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        })
        .unwrap_or(false);

    if !value.validate_email() || !dotted_domain {
        return Err(violation("email", "Invalid email format"));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(violation("max_length", "Max 255 characters"));
    }
    Ok(())
}

/// Phone: exactly ten digits, nothing else.
pub(crate) fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(violation("phone", "Must be 10 digits"))
    }
}

/// Date of joining: a `YYYY-MM-DD` date no later than today.
pub(crate) fn validate_date_of_joining(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(violation("required", "Date of joining is required"));
    }
    match parse_date(value) {
        None => Err(violation("date", "Invalid date")),
        Some(date) if date > today() => Err(violation("future_date", "Cannot be a future date")),
        Some(_) => Ok(()),
    }
}
