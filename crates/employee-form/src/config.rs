//! Submission form configuration.

use std::env;

/// Default service location (the service's default port)
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Submission form configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Base URL of the employee service
    pub service_url: String,
    /// Upper bound for one submission round trip
    pub timeout_seconds: u64,
}

impl FormConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service_url: env::var("EMPLOYEE_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string()),
            timeout_seconds: env::var("EMPLOYEE_FORM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Point the form at another service instance.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
