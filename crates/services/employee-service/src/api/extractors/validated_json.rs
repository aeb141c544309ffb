//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::FieldViolations;

/// Validated JSON extractor that rejects the request with every field violation.
///
/// # Example
///
/// ```rust,ignore
/// use domain::EmployeeSubmission;
/// use employee_service_lib::api::extractors::ValidatedJson;
///
/// async fn add_employee(ValidatedJson(submission): ValidatedJson<EmployeeSubmission>) {
///     // submission passed the shared rule set
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value.validate().map_err(|e| {
            let violations = FieldViolations::from(&e);
            tracing::debug!("Rejected submission: {}", violations);
            AppError::Validation(violations)
        })?;

        Ok(ValidatedJson(value))
    }
}
