//! HTTP client for the employee service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use domain::{ApiMessage, EmployeeSubmission};

use crate::config::FormConfig;
use crate::error::ClientError;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Submission transport used by the form.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeClient: Send + Sync {
    /// Send one candidate record; returns the service's success message.
    async fn add_employee(&self, submission: &EmployeeSubmission) -> Result<String, ClientError>;
}

/// reqwest-backed client for `POST /add-employee`.
#[derive(Debug, Clone)]
pub struct HttpEmployeeClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpEmployeeClient {
    /// Build a client for the configured service.
    pub fn new(config: &FormConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.service_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the submission endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/add-employee", self.base_url)
    }
}

#[async_trait]
impl EmployeeClient for HttpEmployeeClient {
    async fn add_employee(&self, submission: &EmployeeSubmission) -> Result<String, ClientError> {
        let endpoint = self.endpoint();
        debug!("Submitting employee {} to {}", submission.employee_id, endpoint);

        let response = self.http.post(&endpoint).json(submission).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<ApiMessage>(&bytes).ok();
        debug!("Service answered {}", status);

        match (status, body) {
            (status, Some(body)) if status.is_success() => Ok(body.message),
            (StatusCode::BAD_REQUEST, Some(body)) => Err(ClientError::Validation {
                errors: body.violations(),
                message: body.message,
            }),
            (StatusCode::CONFLICT, Some(body)) => Err(ClientError::Conflict(body.message)),
            (status, Some(body)) => Err(ClientError::Server {
                status: status.as_u16(),
                message: body.message,
            }),
            (status, None) => Err(ClientError::InvalidResponse {
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let config = FormConfig::default().with_service_url("http://localhost:5000/");
        let client = HttpEmployeeClient::new(&config).unwrap();

        assert_eq!(client.endpoint(), "http://localhost:5000/add-employee");
    }
}
