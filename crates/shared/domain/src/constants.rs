//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Departments
// =============================================================================

/// Human resources department
pub const DEPARTMENT_HR: &str = "HR";

/// Engineering department
pub const DEPARTMENT_ENGINEERING: &str = "Engineering";

/// Marketing department
pub const DEPARTMENT_MARKETING: &str = "Marketing";

/// Departments offered by the submission form's choice control
pub const DEPARTMENTS: &[&str] = &[DEPARTMENT_HR, DEPARTMENT_ENGINEERING, DEPARTMENT_MARKETING];

/// Check if a department is one of the listed choices
pub fn is_listed_department(department: &str) -> bool {
    DEPARTMENTS.contains(&department)
}

// =============================================================================
// Validation
// =============================================================================

/// Maximum length (in characters) of a business employee identifier
pub const MAX_EMPLOYEE_ID_LENGTH: usize = 10;

/// Maximum length (in characters) of a name or an email address
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length (in characters) of a department or a role
pub const MAX_LABEL_LENGTH: usize = 100;

/// Exact number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// Wire format of the date of joining
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Wire field names
// =============================================================================

pub const FIELD_EMPLOYEE_ID: &str = "employeeId";
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_DEPARTMENT: &str = "department";
pub const FIELD_DATE_OF_JOINING: &str = "dateOfJoining";
pub const FIELD_ROLE: &str = "role";

/// Order in which fields are presented and violations are reported
pub const FIELD_ORDER: &[&str] = &[
    FIELD_EMPLOYEE_ID,
    FIELD_NAME,
    FIELD_EMAIL,
    FIELD_PHONE,
    FIELD_DEPARTMENT,
    FIELD_DATE_OF_JOINING,
    FIELD_ROLE,
];

// =============================================================================
// Messages
// =============================================================================

/// Response message for a persisted employee
pub const MESSAGE_EMPLOYEE_ADDED: &str = "Employee added successfully";

/// Response message for a rejected submission
pub const MESSAGE_VALIDATION_FAILED: &str = "Validation failed";

/// Entity name used in conflict messages ("Employee already exists")
pub const ENTITY_EMPLOYEE: &str = "Employee";
