//! Combined binary for development - runs the service and the form in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_form_lib::FormConfig;
use employee_service_lib::config::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "employee-app")]
#[command(about = "Employee service and submission form in one binary")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the employee service only
    Serve {
        #[arg(long, env = "EMPLOYEE_SERVICE_HOST", default_value = DEFAULT_HOST)]
        host: String,
        #[arg(long, env = "EMPLOYEE_SERVICE_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Run the service and fill in the form against it (development mode)
    Dev {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, env = "EMPLOYEE_SERVICE_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The interactive form shares the terminal, so dev mode logs less
    let default_filter = match cli.command {
        Commands::Dev { .. } => "warn",
        _ => "info,tower_http=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            employee_service_lib::run_embedded(&host, port).await?;
        }
        Commands::Dev { host, port } => {
            info!("Starting employee service on http://{}:{}", host, port);

            let service_host = host.clone();
            let service_handle = tokio::spawn(async move {
                if let Err(e) = employee_service_lib::run_embedded(&service_host, port).await {
                    error!("Employee service failed: {}", e);
                }
            });

            // Wait a moment for the service to start
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;

            let config = FormConfig::from_env().with_service_url(format!("http://{}:{}", host, port));

            tokio::select! {
                _ = service_handle => {
                    error!("Employee service exited unexpectedly");
                }
                result = employee_form_lib::run_interactive(config) => {
                    result?;
                    info!("Form closed");
                }
            }
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => employee_service_lib::MigrateAction::Up,
                MigrateAction::Down => employee_service_lib::MigrateAction::Down,
                MigrateAction::Status => employee_service_lib::MigrateAction::Status,
                MigrateAction::Fresh => employee_service_lib::MigrateAction::Fresh,
            };

            employee_service_lib::run_migrations(migrate_action).await?;
        }
    }

    Ok(())
}
