//! Employee domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::constants::{DATE_FORMAT, FIELD_DATE_OF_JOINING};
use crate::error::{DomainError, DomainResult};
use crate::validation::{
    parse_date, validate_date_of_joining, validate_department, validate_email,
    validate_employee_id, validate_name, validate_phone, validate_role, FieldViolation,
    FieldViolations,
};

/// Persisted employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Auto-assigned internal id
    pub id: i32,
    pub name: String,
    /// Business employee identifier
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub role: String,
}

/// Candidate record as received from an untrusted caller.
///
/// Carries the shared rule set: the service validates incoming JSON with it
/// and the form validates its inputs with it before submitting. Missing or
/// `null` fields deserialize as empty strings so they surface as field
/// violations instead of parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeSubmission {
    /// Business employee identifier (1 to 10 characters)
    #[validate(custom(function = "validate_employee_id"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "E1", max_length = 10))]
    pub employee_id: String,

    /// Full name (at most 255 characters)
    #[validate(custom(function = "validate_name"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: String,

    /// Email address with a dotted domain (unique)
    #[validate(custom(function = "validate_email"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: String,

    /// Phone number, exactly ten digits
    #[validate(custom(function = "validate_phone"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "1234567890"))]
    pub phone: String,

    /// Department name (at most 100 characters)
    #[validate(custom(function = "validate_department"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "Engineering"))]
    pub department: String,

    /// Date of joining, `YYYY-MM-DD`, not in the future
    #[validate(custom(function = "validate_date_of_joining"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "2020-01-01"))]
    pub date_of_joining: String,

    /// Job role (at most 100 characters)
    #[validate(custom(function = "validate_role"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "Clerk"))]
    pub role: String,
}

impl EmployeeSubmission {
    /// Run the shared rule set and collect every violation.
    pub fn violations(&self) -> FieldViolations {
        match self.validate() {
            Ok(()) => FieldViolations::default(),
            Err(errors) => FieldViolations::from(&errors),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Employee data that passed the rule set, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub role: String,
}

impl TryFrom<EmployeeSubmission> for NewEmployee {
    type Error = DomainError;

    fn try_from(submission: EmployeeSubmission) -> DomainResult<Self> {
        let violations = submission.violations();
        if !violations.is_empty() {
            return Err(violations.into());
        }

        let date_of_joining = parse_date(&submission.date_of_joining).ok_or_else(|| {
            DomainError::Validation(FieldViolations::new(vec![FieldViolation::new(
                FIELD_DATE_OF_JOINING,
                "Invalid date",
            )]))
        })?;

        Ok(Self {
            name: submission.name,
            employee_id: submission.employee_id,
            email: submission.email,
            phone: submission.phone,
            department: submission.department,
            date_of_joining,
            role: submission.role,
        })
    }
}

impl From<&Employee> for EmployeeSubmission {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.clone(),
            date_of_joining: employee.date_of_joining.format(DATE_FORMAT).to_string(),
            role: employee.role.clone(),
        }
    }
}
