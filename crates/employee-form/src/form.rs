//! Form state: field values, per-field errors and the last notice.
//!
//! The form applies the same rule set as the service before it sends
//! anything, so a submission with a known violation never leaves the process.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::{debug, info};

use domain::{
    today, EmployeeSubmission, FieldViolations, DATE_FORMAT, DEPARTMENTS, FIELD_DATE_OF_JOINING,
    FIELD_DEPARTMENT, FIELD_EMAIL, FIELD_EMPLOYEE_ID, FIELD_NAME, FIELD_PHONE, FIELD_ROLE,
};

use crate::client::EmployeeClient;
use crate::error::{ClientError, FormError};

/// Input controls of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    EmployeeId,
    Name,
    Email,
    Phone,
    Department,
    DateOfJoining,
    Role,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::EmployeeId,
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Department,
        Field::DateOfJoining,
        Field::Role,
    ];

    /// Wire name used in submissions and violation reports
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::EmployeeId => FIELD_EMPLOYEE_ID,
            Field::Name => FIELD_NAME,
            Field::Email => FIELD_EMAIL,
            Field::Phone => FIELD_PHONE,
            Field::Department => FIELD_DEPARTMENT,
            Field::DateOfJoining => FIELD_DATE_OF_JOINING,
            Field::Role => FIELD_ROLE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::EmployeeId => "Employee ID",
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Department => "Department",
            Field::DateOfJoining => "Date of Joining",
            Field::Role => "Role",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.wire_name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Message shown after the last submission or reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// What happened to a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; the form has been reset
    Created(String),
    /// Local rule violations; nothing was sent
    Invalid,
    /// Sent but not stored; values are kept
    Rejected(String),
}

/// Employee submission form.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    values: EmployeeSubmission,
    errors: FieldViolations,
    notice: Option<Notice>,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with the given values (no validation yet)
    pub fn with_values(values: EmployeeSubmission) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &EmployeeSubmission {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::EmployeeId => &self.values.employee_id,
            Field::Name => &self.values.name,
            Field::Email => &self.values.email,
            Field::Phone => &self.values.phone,
            Field::Department => &self.values.department,
            Field::DateOfJoining => &self.values.date_of_joining,
            Field::Role => &self.values.role,
        }
    }

    pub fn errors(&self) -> &FieldViolations {
        &self.errors
    }

    /// Message to show under a control, if any
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.message_for(field.wire_name())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Set a text control. Editing a field clears its previous error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::EmployeeId => self.values.employee_id = value,
            Field::Name => self.values.name = value,
            Field::Email => self.values.email = value,
            Field::Phone => self.values.phone = value,
            Field::Department => self.values.department = value,
            Field::DateOfJoining => self.values.date_of_joining = value,
            Field::Role => self.values.role = value,
        }
        self.errors.clear_field(field.wire_name());
    }

    /// Choice control: pick one of [`DEPARTMENTS`] by position.
    pub fn select_department(&mut self, index: usize) -> Result<(), FormError> {
        let department = DEPARTMENTS
            .get(index)
            .ok_or(FormError::UnknownDepartment(index))?;
        self.set(Field::Department, *department);
        Ok(())
    }

    /// Date picker: future dates cannot be picked.
    pub fn pick_date(&mut self, date: NaiveDate) -> Result<(), FormError> {
        if date > today() {
            return Err(FormError::FutureDate(date));
        }
        self.set(Field::DateOfJoining, date.format(DATE_FORMAT).to_string());
        Ok(())
    }

    /// Run the shared rule set; true when every field passes.
    pub fn validate(&mut self) -> bool {
        self.errors = self.values.violations();
        self.errors.is_empty()
    }

    /// Validate locally, then send the record and apply the service's answer.
    pub async fn submit(&mut self, client: &dyn EmployeeClient) -> SubmitOutcome {
        self.notice = None;

        if !self.validate() {
            debug!("Submission blocked locally: {}", self.errors);
            return SubmitOutcome::Invalid;
        }

        match client.add_employee(&self.values).await {
            Ok(message) => {
                info!("Employee {} submitted", self.values.employee_id);
                self.reset();
                self.notice = Some(Notice::Success(message.clone()));
                SubmitOutcome::Created(message)
            }
            Err(ClientError::Validation { message, errors }) => {
                self.errors = errors;
                self.reject(message)
            }
            Err(err) => self.reject(err.to_string()),
        }
    }

    /// Clear every field, error and notice without contacting the service.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn reject(&mut self, message: String) -> SubmitOutcome {
        debug!("Submission rejected: {}", message);
        self.notice = Some(Notice::Error(message.clone()));
        SubmitOutcome::Rejected(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockEmployeeClient;
    use chrono::Duration;
    use domain::FieldViolation;

    fn filled_form() -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.set(Field::EmployeeId, "E1");
        form.set(Field::Name, "A");
        form.set(Field::Email, "a@x.com");
        form.set(Field::Phone, "1234567890");
        form.select_department(0).unwrap();
        form.pick_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).unwrap();
        form.set(Field::Role, "Clerk");
        form
    }

    #[test]
    fn test_controls_fill_values() {
        let form = filled_form();

        assert_eq!(form.value(Field::Department), "HR");
        assert_eq!(form.value(Field::DateOfJoining), "2020-01-01");
        assert_eq!(form.values().employee_id, "E1");
    }

    #[test]
    fn test_department_choice_is_bounded() {
        let mut form = EmployeeForm::new();

        assert_eq!(form.select_department(2), Ok(()));
        assert_eq!(form.value(Field::Department), "Marketing");
        assert_eq!(
            form.select_department(DEPARTMENTS.len()),
            Err(FormError::UnknownDepartment(DEPARTMENTS.len()))
        );
        assert_eq!(form.value(Field::Department), "Marketing");
    }

    #[test]
    fn test_date_picker_refuses_future() {
        let mut form = EmployeeForm::new();
        let tomorrow = today() + Duration::days(1);

        assert!(form.pick_date(today()).is_ok());
        assert_eq!(form.pick_date(tomorrow), Err(FormError::FutureDate(tomorrow)));
        assert_eq!(
            form.value(Field::DateOfJoining),
            today().format(DATE_FORMAT).to_string()
        );
    }

    #[test]
    fn test_field_parses_wire_name() {
        assert_eq!("dateOfJoining".parse::<Field>(), Ok(Field::DateOfJoining));
        assert!("salary".parse::<Field>().is_err());
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mut client = MockEmployeeClient::new();
        client.expect_add_employee().times(0);

        let mut form = filled_form();
        form.set(Field::Phone, "12345");

        let outcome = form.submit(&client).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(form.error_for(Field::Phone), Some("Must be 10 digits"));
        assert_eq!(form.value(Field::Phone), "12345");
    }

    #[tokio::test]
    async fn test_success_resets_and_informs() {
        let mut client = MockEmployeeClient::new();
        client
            .expect_add_employee()
            .withf(|submission| submission.employee_id == "E1" && submission.department == "HR")
            .times(1)
            .returning(|_| Ok("Employee added successfully".to_string()));

        let mut form = filled_form();
        let outcome = form.submit(&client).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Created("Employee added successfully".to_string())
        );
        assert_eq!(form.values(), &EmployeeSubmission::default());
        assert_eq!(
            form.notice(),
            Some(&Notice::Success("Employee added successfully".to_string()))
        );
    }

    #[tokio::test]
    async fn test_conflict_keeps_values() {
        let mut client = MockEmployeeClient::new();
        client
            .expect_add_employee()
            .times(1)
            .returning(|_| Err(ClientError::Conflict("Employee already exists".to_string())));

        let mut form = filled_form();
        let outcome = form.submit(&client).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Employee already exists".to_string())
        );
        assert_eq!(form.value(Field::EmployeeId), "E1");
        assert_eq!(
            form.notice(),
            Some(&Notice::Error("Employee already exists".to_string()))
        );
    }

    #[tokio::test]
    async fn test_service_field_errors_are_shown() {
        let mut client = MockEmployeeClient::new();
        client.expect_add_employee().returning(|_| {
            Err(ClientError::Validation {
                message: "Validation failed".to_string(),
                errors: FieldViolations::new(vec![FieldViolation::new(
                    "email",
                    "Invalid email format",
                )]),
            })
        });

        let mut form = filled_form();
        form.submit(&client).await;

        assert_eq!(form.error_for(Field::Email), Some("Invalid email format"));
        assert_eq!(form.value(Field::Email), "a@x.com");
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = EmployeeForm::new();
        assert!(!form.validate());
        assert!(form.error_for(Field::Name).is_some());

        form.set(Field::Name, "A");

        assert!(form.error_for(Field::Name).is_none());
        assert!(form.error_for(Field::Role).is_some());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.set(Field::Phone, "1");
        form.validate();

        form.reset();

        assert_eq!(form.values(), &EmployeeSubmission::default());
        assert!(form.errors().is_empty());
        assert!(form.notice().is_none());
    }
}
