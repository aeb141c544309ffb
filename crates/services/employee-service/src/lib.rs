//! Employee Service Library
//!
//! Validates employee submissions and stores them in the employees table.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use axum::Router;
use sea_orm::DbErr;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::EmployeeServiceConfig;
use crate::infra::Database;

/// Run the employee service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = EmployeeServiceConfig::from_env().with_addr(host, port);
    run_server_with_config(config).await
}

/// Connect to the database, apply migrations and build the HTTP application.
pub async fn build_app(config: &EmployeeServiceConfig) -> Result<Router, DbErr> {
    let db = Arc::new(Database::connect(&config.database).await?);
    let state = AppState::from_database(db);

    Ok(create_router(state, &config.cors_allowed_origin))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = EmployeeServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    config: EmployeeServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config).await?;

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Employee service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Employee service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
