//! Employee Form - submit employee records to the employee service.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{is_listed_department, EmployeeSubmission};
use employee_form_lib::{
    EmployeeForm, Field, FormConfig, HttpEmployeeClient, SubmitOutcome,
};

#[derive(Parser)]
#[command(name = "employee-form")]
#[command(about = "Employee record submission form")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Employee service base URL
    #[arg(long, global = true, env = "EMPLOYEE_SERVICE_URL")]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the form interactively
    Interactive,
    /// Submit one record from the command line
    Submit(SubmitArgs),
}

#[derive(Args)]
struct SubmitArgs {
    #[arg(long, default_value = "")]
    employee_id: String,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    department: String,
    /// Date of joining (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    date_of_joining: String,
    #[arg(long, default_value = "")]
    role: String,
}

impl From<SubmitArgs> for EmployeeSubmission {
    fn from(args: SubmitArgs) -> Self {
        Self {
            employee_id: args.employee_id,
            name: args.name,
            email: args.email,
            phone: args.phone,
            department: args.department,
            date_of_joining: args.date_of_joining,
            role: args.role,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = FormConfig::from_env();
    if let Some(url) = cli.service_url {
        config = config.with_service_url(url);
    }

    match cli.command {
        Commands::Interactive => employee_form_lib::run_interactive(config).await?,
        Commands::Submit(args) => {
            let client = HttpEmployeeClient::new(&config)?;
            let submission = EmployeeSubmission::from(args);
            if !submission.department.is_empty() && !is_listed_department(&submission.department) {
                tracing::warn!("Department {:?} is not one of the listed choices", submission.department);
            }

            let mut form = EmployeeForm::with_values(submission);
            match form.submit(&client).await {
                SubmitOutcome::Created(message) => println!("{}", message),
                SubmitOutcome::Invalid => {
                    for field in Field::ALL {
                        if let Some(message) = form.error_for(field) {
                            eprintln!("{}: {}", field.label(), message);
                        }
                    }
                    std::process::exit(2);
                }
                SubmitOutcome::Rejected(message) => {
                    eprintln!("{}", message);
                    for violation in form.errors().iter() {
                        eprintln!("  {}: {}", violation.field, violation.message);
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
