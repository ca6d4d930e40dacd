//! Surveys CLI - login, signup and survey listing against the surveys API.

mod config;
mod factories;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{
    AddAccount, AddAccountParams, Authentication, AuthenticationParams, LoadSurveyList,
    UpdateCurrentAccount,
};
use infra::{MemoryStorageAdapter, ReqwestHttpClient};
use validation::{field_input, ValidationComposite};

use crate::config::SurveysConfig;

#[derive(Parser)]
#[command(name = "surveys")]
#[command(about = "Client for the surveys API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a new account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        password_confirmation: String,
    },
    /// List the available surveys
    List,
}

/// Run the composite over every field and collect the failures.
fn validate_form(
    composite: &ValidationComposite,
    input: &validation::FieldInput,
    fields: &[&str],
) -> Vec<String> {
    fields
        .iter()
        .copied()
        .filter_map(|field| {
            composite
                .validate(field, input)
                .map(|message| format!("{field}: {message}"))
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = SurveysConfig::from_env();
    let http_client = Arc::new(ReqwestHttpClient::new()?);
    let storage = Arc::new(MemoryStorageAdapter::new());

    match cli.command {
        Commands::Login { email, password } => {
            let input = field_input([("email", email.as_str()), ("password", password.as_str())]);
            let errors = validate_form(
                &factories::make_login_validation(),
                &input,
                &["email", "password"],
            );
            if !errors.is_empty() {
                return Err(errors.join("; ").into());
            }

            let authentication = factories::make_authentication(&config, http_client);
            let account = authentication
                .auth(AuthenticationParams { email, password })
                .await?;

            factories::make_update_current_account(storage)
                .save(&account)
                .await?;

            info!(account = %account.email, "authenticated");
            println!("Logged in as {} ({})", account.name, account.email);
            println!("Access token: {}", account.access_token);
        }
        Commands::Signup {
            name,
            email,
            password,
            password_confirmation,
        } => {
            let input = field_input([
                ("name", name.as_str()),
                ("email", email.as_str()),
                ("password", password.as_str()),
                ("passwordConfirmation", password_confirmation.as_str()),
            ]);
            let errors = validate_form(
                &factories::make_signup_validation(),
                &input,
                &["name", "email", "password", "passwordConfirmation"],
            );
            if !errors.is_empty() {
                return Err(errors.join("; ").into());
            }

            let add_account = factories::make_add_account(&config, http_client);
            let account = add_account
                .add(AddAccountParams {
                    name,
                    email,
                    password,
                    password_confirmation,
                })
                .await?;

            factories::make_update_current_account(storage)
                .save(&account)
                .await?;

            println!("Account created for {} ({})", account.name, account.email);
            println!("Access token: {}", account.access_token);
        }
        Commands::List => {
            let load_survey_list = factories::make_load_survey_list(&config, http_client);
            let surveys = load_survey_list.load().await?;

            if surveys.is_empty() {
                println!("No surveys available");
            }
            for survey in surveys {
                let marker = if survey.did_answer { "answered" } else { "open" };
                println!(
                    "{}  {}  [{}]",
                    survey.date.format("%Y-%m-%d"),
                    survey.question,
                    marker
                );
            }
        }
    }

    Ok(())
}
