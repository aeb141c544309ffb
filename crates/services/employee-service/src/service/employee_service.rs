//! Employee service - Handles record creation.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{DomainError, Employee, NewEmployee};

use crate::repository::EmployeeRepository;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Persist a validated employee.
    ///
    /// Fails with a conflict when the employee id or the email is already taken.
    async fn add_employee(&self, employee: NewEmployee) -> AppResult<Employee>;
}

/// Concrete implementation of EmployeeService using repository.
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance with repository
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn add_employee(&self, employee: NewEmployee) -> AppResult<Employee> {
        // Check if employee id or email already exists
        if let Some(existing) = self
            .repo
            .find_duplicate(&employee.employee_id, &employee.email)
            .await?
        {
            tracing::info!(
                employee_id = %employee.employee_id,
                existing_id = existing.id,
                "Rejected duplicate employee"
            );
            return Err(DomainError::duplicate_employee().into());
        }

        // The unique constraints still back this up if a concurrent insert wins
        let created = self.repo.create(employee).await?;
        tracing::info!(id = created.id, employee_id = %created.employee_id, "Employee added");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockEmployeeRepository;
    use chrono::NaiveDate;
    use common::AppError;
    use sea_orm::DbErr;

    fn new_employee() -> NewEmployee {
        NewEmployee {
            name: "A".to_string(),
            employee_id: "E1".to_string(),
            email: "a@x.com".to_string(),
            phone: "1234567890".to_string(),
            department: "HR".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            role: "Clerk".to_string(),
        }
    }

    fn stored(id: i32, employee: &NewEmployee) -> Employee {
        Employee {
            id,
            name: employee.name.clone(),
            employee_id: employee.employee_id.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.clone(),
            date_of_joining: employee.date_of_joining,
            role: employee.role.clone(),
        }
    }

    #[tokio::test]
    async fn test_add_employee_success() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_find_duplicate()
            .withf(|employee_id, email| employee_id == "E1" && email == "a@x.com")
            .times(1)
            .returning(|_, _| Ok(None));

        mock_repo
            .expect_create()
            .times(1)
            .returning(|employee| Ok(stored(1, &employee)));

        let service = EmployeeManager::new(Arc::new(mock_repo));
        let result = service.add_employee(new_employee()).await;

        assert!(result.is_ok());
        let employee = result.unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(employee.employee_id, "E1");
    }

    #[tokio::test]
    async fn test_add_employee_duplicate_skips_insert() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_find_duplicate()
            .times(1)
            .returning(|_, _| Ok(Some(stored(1, &new_employee()))));

        mock_repo.expect_create().times(0);

        let service = EmployeeManager::new(Arc::new(mock_repo));
        let result = service.add_employee(new_employee()).await;

        match result {
            Err(AppError::Conflict(entity)) => assert_eq!(entity, "Employee"),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_employee_lost_race_is_conflict() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_find_duplicate()
            .returning(|_, _| Ok(None));

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(DomainError::duplicate_employee().into()));

        let service = EmployeeManager::new(Arc::new(mock_repo));
        let result = service.add_employee(new_employee()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_add_employee_storage_failure() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_find_duplicate()
            .returning(|_, _| Err(AppError::Database(DbErr::Custom("connection reset".into()))));

        mock_repo.expect_create().times(0);

        let service = EmployeeManager::new(Arc::new(mock_repo));
        let result = service.add_employee(new_employee()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
