//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::employee_handler;
use domain::{ApiMessage, EmployeeSubmission, FieldViolation};

/// OpenAPI documentation for the employee service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Service",
        version = "0.1.0",
        description = "Validates and stores employee records submitted by the employee form",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(employee_handler::add_employee),
    components(schemas(EmployeeSubmission, ApiMessage, FieldViolation)),
    tags(
        (name = "Employees", description = "Employee record submission")
    )
)]
pub struct ApiDoc;
