//! Employee Form Library
//!
//! Collects an employee record, checks it against the shared rule set and
//! submits it to the employee service.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod prompt;

use std::io;

use tracing::info;

pub use client::{EmployeeClient, HttpEmployeeClient};
pub use config::FormConfig;
pub use error::{ClientError, FormError};
pub use form::{EmployeeForm, Field, Notice, SubmitOutcome};
pub use prompt::FormSession;

#[cfg(any(test, feature = "test-utils"))]
pub use client::MockEmployeeClient;

/// Run the terminal form on stdin/stdout until the user quits.
pub async fn run_interactive(config: FormConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = HttpEmployeeClient::new(&config)?;
    info!("Submitting to {}", client.endpoint());

    let stdin = io::stdin();
    let mut session = FormSession::new(stdin.lock(), io::stdout());
    session.run(&client).await?;

    Ok(())
}
