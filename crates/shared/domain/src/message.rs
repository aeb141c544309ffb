//! JSON body exchanged by the service and the form.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldViolation, FieldViolations};

/// Response body for every outcome of a submission.
///
/// `errors` is only present on a validation rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiMessage {
    /// Outcome summary
    #[cfg_attr(feature = "openapi", schema(example = "Employee added successfully"))]
    pub message: String,
    /// Field-level violations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: FieldViolations) -> Self {
        Self {
            message: message.into(),
            errors: errors.into_vec(),
        }
    }

    /// Violations carried by this message, in report order
    pub fn violations(&self) -> FieldViolations {
        FieldViolations::new(self.errors.clone())
    }
}
