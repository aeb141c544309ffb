//! Employee submission handler.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use common::AppResult;
use domain::{ApiMessage, EmployeeSubmission, NewEmployee, MESSAGE_EMPLOYEE_ADDED};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new().route("/add-employee", post(add_employee))
}

/// Validate and persist a new employee record
#[utoipa::path(
    post,
    path = "/add-employee",
    tag = "Employees",
    request_body = EmployeeSubmission,
    responses(
        (status = 201, description = "Employee added successfully", body = ApiMessage),
        (status = 400, description = "Validation failed or malformed body", body = ApiMessage),
        (status = 409, description = "Employee already exists", body = ApiMessage),
        (status = 500, description = "Storage failure", body = ApiMessage)
    )
)]
pub async fn add_employee(
    State(state): State<AppState>,
    ValidatedJson(submission): ValidatedJson<EmployeeSubmission>,
) -> AppResult<(StatusCode, Json<ApiMessage>)> {
    let employee = NewEmployee::try_from(submission)?;

    state.employee_service.add_employee(employee).await?;

    Ok((StatusCode::CREATED, Json(ApiMessage::new(MESSAGE_EMPLOYEE_ADDED))))
}
