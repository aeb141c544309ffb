//! End-to-end tests against a real (in-memory SQLite) employees table.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{AppError, AppResult, DatabaseConfig};
use domain::{Employee, NewEmployee};
use employee_service_lib::api::{create_router, AppState};
use employee_service_lib::infra::Database;
use employee_service_lib::repository::entities::employee::Entity as EmployeeEntity;
use employee_service_lib::repository::{EmployeeRepository, EmployeeStore};
use employee_service_lib::service::{EmployeeManager, EmployeeService};

async fn test_database() -> Arc<Database> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_seconds: 8,
    };
    Arc::new(Database::connect(&config).await.expect("sqlite database"))
}

async fn record_count(db: &Database) -> u64 {
    EmployeeEntity::find().count(db.connection()).await.unwrap()
}

fn scenario_payload() -> Value {
    json!({
        "name": "A",
        "employeeId": "E1",
        "email": "a@x.com",
        "phone": "1234567890",
        "department": "HR",
        "dateOfJoining": "2020-01-01",
        "role": "Clerk"
    })
}

async fn submit(app: &Router, payload: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/add-employee")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn new_employee(employee_id: &str, email: &str) -> NewEmployee {
    NewEmployee {
        name: "A".to_string(),
        employee_id: employee_id.to_string(),
        email: email.to_string(),
        phone: "1234567890".to_string(),
        department: "HR".to_string(),
        date_of_joining: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        role: "Clerk".to_string(),
    }
}

#[tokio::test]
async fn test_submission_scenario() {
    let db = test_database().await;
    let app = create_router(AppState::from_database(db.clone()), "*");

    // First submission is stored
    let (status, body) = submit(&app, &scenario_payload()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Employee added successfully");
    assert_eq!(record_count(&db).await, 1);

    let stored = EmployeeEntity::find()
        .one(db.connection())
        .await
        .unwrap()
        .map(Employee::from)
        .expect("stored employee");
    assert_eq!(stored.name, "A");
    assert_eq!(stored.employee_id, "E1");
    assert_eq!(stored.email, "a@x.com");
    assert_eq!(stored.phone, "1234567890");
    assert_eq!(stored.department, "HR");
    assert_eq!(stored.date_of_joining, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(stored.role, "Clerk");

    // Same payload again
    let (status, body) = submit(&app, &scenario_payload()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Employee already exists");
    assert_eq!(record_count(&db).await, 1);

    // New identifier, same email
    let mut same_email = scenario_payload();
    same_email["employeeId"] = json!("E2");
    let (status, _) = submit(&app, &same_email).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(record_count(&db).await, 1);

    // Invalid phone
    let mut short_phone = scenario_payload();
    short_phone["phone"] = json!("12345");
    let (status, body) = submit(&app, &short_phone).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "phone");
    assert_eq!(record_count(&db).await, 1);
}

#[tokio::test]
async fn test_same_identifier_different_email_is_conflict() {
    let db = test_database().await;
    let app = create_router(AppState::from_database(db.clone()), "*");

    submit(&app, &scenario_payload()).await;

    let mut same_id = scenario_payload();
    same_id["email"] = json!("b@x.com");
    let (status, _) = submit(&app, &same_id).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(record_count(&db).await, 1);
}

#[tokio::test]
async fn test_invalid_submission_persists_nothing() {
    let db = test_database().await;
    let app = create_router(AppState::from_database(db.clone()), "*");

    let (status, body) = submit(&app, &json!({ "employeeId": "E1" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(6));
    assert_eq!(record_count(&db).await, 0);
}

#[tokio::test]
async fn test_concurrent_duplicates_store_one_record() {
    let db = test_database().await;
    let app = create_router(AppState::from_database(db.clone()), "*");

    let payload = scenario_payload();
    let ((first, _), (second, _)) = tokio::join!(submit(&app, &payload), submit(&app, &payload));

    let mut statuses = vec![first, second];
    statuses.sort_by_key(|s| s.as_u16());
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
    assert_eq!(record_count(&db).await, 1);
}

/// Repository whose pre-check never sees existing rows, as when two inserts race
struct BlindPrecheck(EmployeeStore);

#[async_trait]
impl EmployeeRepository for BlindPrecheck {
    async fn find_duplicate(&self, _employee_id: &str, _email: &str) -> AppResult<Option<Employee>> {
        Ok(None)
    }

    async fn create(&self, employee: NewEmployee) -> AppResult<Employee> {
        self.0.create(employee).await
    }
}

#[tokio::test]
async fn test_unique_constraint_backs_up_precheck() {
    let db = test_database().await;
    let repo = Arc::new(BlindPrecheck(EmployeeStore::new(db.get_connection())));
    let service = EmployeeManager::new(repo);

    let created = service.add_employee(new_employee("E1", "a@x.com")).await.unwrap();
    assert!(created.id > 0);

    let same_id = service.add_employee(new_employee("E1", "b@x.com")).await;
    assert!(matches!(same_id, Err(AppError::Conflict(_))));

    let same_email = service.add_employee(new_employee("E2", "a@x.com")).await;
    match same_email {
        Err(err) => assert_eq!(err.user_message(), "Employee already exists"),
        Ok(employee) => panic!("duplicate email stored as {:?}", employee),
    }

    assert_eq!(record_count(&db).await, 1);
}

#[tokio::test]
async fn test_repository_finds_by_either_key() {
    let db = test_database().await;
    let store = EmployeeStore::new(db.get_connection());

    store.create(new_employee("E1", "a@x.com")).await.unwrap();

    assert!(store.find_duplicate("E1", "z@x.com").await.unwrap().is_some());
    assert!(store.find_duplicate("E9", "a@x.com").await.unwrap().is_some());
    assert!(store.find_duplicate("E9", "z@x.com").await.unwrap().is_none());
    // Email match is exact
    assert!(store.find_duplicate("E9", "A@X.COM").await.unwrap().is_none());
}

#[tokio::test]
async fn test_fresh_migrations_reset_table() {
    let db = test_database().await;
    let store = EmployeeStore::new(db.get_connection());
    store.create(new_employee("E1", "a@x.com")).await.unwrap();
    assert_eq!(record_count(&db).await, 1);

    db.fresh_migrations().await.unwrap();

    assert_eq!(record_count(&db).await, 0);
    let status = db.migration_status().await.unwrap();
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_longest_valid_values_are_stored() {
    let db = test_database().await;
    let app = create_router(AppState::from_database(db.clone()), "*");

    let mut payload = scenario_payload();
    payload["name"] = json!("x".repeat(255));
    payload["department"] = json!("d".repeat(100));
    payload["role"] = json!("r".repeat(100));

    let (status, _) = submit(&app, &payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record_count(&db).await, 1);
}

#[tokio::test]
async fn test_migrations_are_recorded() {
    let db = test_database().await;

    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 1);
    assert!(status.iter().all(|(_, applied)| *applied));
    db.ping().await.unwrap();
}
