//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, NotSet,
    QueryFilter, Set, SqlErr,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use common::{AppError, AppResult};
use domain::{DomainError, Employee, NewEmployee};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Records are insert-only: there is no update or delete path.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find any record whose business identifier or email matches
    async fn find_duplicate(&self, employee_id: &str, email: &str) -> AppResult<Option<Employee>>;

    /// Insert a new record.
    ///
    /// A unique-constraint violation is reported as a conflict.
    async fn create(&self, employee: NewEmployee) -> AppResult<Employee>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_duplicate(&self, employee_id: &str, email: &str) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find()
            .filter(
                Condition::any()
                    .add(employee::Column::EmployeeId.eq(employee_id))
                    .add(employee::Column::Email.eq(email)),
            )
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn create(&self, employee: NewEmployee) -> AppResult<Employee> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(employee.name),
            employee_id: Set(employee.employee_id),
            email: Set(employee.email),
            phone: Set(employee.phone),
            department: Set(employee.department),
            date_of_joining: Set(employee.date_of_joining),
            role: Set(employee.role),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(Employee::from(model)),
            Err(err) if is_unique_violation(&err) => {
                tracing::warn!("Insert lost a duplicate race: {}", err);
                Err(DomainError::duplicate_employee().into())
            }
            Err(err) => Err(AppError::from(err)),
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
