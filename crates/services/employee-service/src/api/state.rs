//! Application state shared by the handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::EmployeeStore;
use crate::service::{EmployeeManager, EmployeeService};

/// Application state containing the services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Employee record service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the default store and service on top of a connected database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(EmployeeStore::new(database.get_connection()));
        let employee_service = Arc::new(EmployeeManager::new(repo));

        Self {
            employee_service,
            database,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(employee_service: Arc<dyn EmployeeService>, database: Arc<Database>) -> Self {
        Self {
            employee_service,
            database,
        }
    }
}
