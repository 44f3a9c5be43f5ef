use crate::{
    commands::{Commands, FormArgs},
    env::EnvManager,
    error::CliError,
    output::ValidationReport,
};
use clap::Parser;
use connectors::{
    config::{ConsoleConfig, parse_base_url},
    console::ConsoleClient,
};
use model::{
    form::{FormKind, FormRecord, fields},
    validation::LookupFailurePolicy,
};
use rules::feedback::ConnectionTestBanner;
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod conn;
mod env;
mod error;
mod form;
mod output;

#[derive(Parser)]
#[command(
    name = "formgate",
    version = "0.1.0",
    about = "Validate data-integration console forms"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Console base URL; overrides FORMGATE_BASE_URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Load configuration variables from this file
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Let the form through when a console lookup could not be made
    #[arg(long, global = true)]
    allow_on_lookup_failure: bool,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,
}

/// Process outcome of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Accepted,
    Rejected,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Accepted => ExitCode::SUCCESS,
            Outcome::Rejected => ExitCode::from(2),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome, CliError> {
    let config = load_config(&cli)?;
    let client = ConsoleClient::new(&config)?;
    let policy = config.lookup_failure;

    info!("Using console at {}", client.base_url());

    match &cli.command {
        Commands::ConnectionCreate { form } => {
            let record = form::read_form(form)?;
            let result = rules::validate_connection_create(&record, &client).await;
            emit_validation(FormKind::ConnectionCreate, result, policy, &cli, form).await
        }
        Commands::ConnectionEdit { id, form } => {
            let record = form::read_form(form)?;
            let self_id = edited_connection_id(id.as_deref(), &record)?;
            let result = rules::validate_connection_edit(&record, &client, &self_id).await;
            emit_validation(FormKind::ConnectionEdit, result, policy, &cli, form).await
        }
        Commands::TransferCreate { form } => {
            let record = form::read_form(form)?;
            let result = rules::validate_create_transfer(&record, &client).await;
            emit_validation(FormKind::CreateTransfer, result, policy, &cli, form).await
        }
        Commands::TestConnection { form } => {
            let record = form::read_form(form)?;
            let report = conn::test_connection(&client, &record).await;
            output::emit(&report, cli.json, form.output.as_deref()).await?;

            Ok(match report.banner {
                ConnectionTestBanner::Success => Outcome::Accepted,
                _ => Outcome::Rejected,
            })
        }
    }
}

async fn emit_validation(
    kind: FormKind,
    result: model::validation::ValidationResult,
    policy: LookupFailurePolicy,
    cli: &Cli,
    form: &FormArgs,
) -> Result<Outcome, CliError> {
    let report = ValidationReport::new(kind, result, policy);
    output::emit(&report, cli.json, form.output.as_deref()).await?;

    Ok(if report.feedback.submit {
        Outcome::Accepted
    } else {
        Outcome::Rejected
    })
}

fn load_config(cli: &Cli) -> Result<ConsoleConfig, CliError> {
    let mut env = EnvManager::new();
    if let Some(path) = &cli.env_file {
        env.load_from_file(path)?;
    }

    let mut config = ConsoleConfig::from_vars(env.all())?;
    if let Some(url) = &cli.base_url {
        config.base_url = parse_base_url(url)?;
    }
    if cli.allow_on_lookup_failure {
        config.lookup_failure = LookupFailurePolicy::Allow;
    }
    Ok(config)
}

/// The connection being edited: `--id` wins over the form's own `id` field.
fn edited_connection_id(flag: Option<&str>, record: &FormRecord) -> Result<String, CliError> {
    let id = match flag {
        Some(id) => id.trim(),
        None => record.get(fields::ID).trim(),
    };
    if id.is_empty() {
        return Err(CliError::MissingConnectionId);
    }
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_id_prefers_flag() {
        let record = FormRecord::new().with(fields::ID, "7");
        assert_eq!(edited_connection_id(Some(" 9 "), &record).unwrap(), "9");
        assert_eq!(edited_connection_id(None, &record).unwrap(), "7");
    }

    #[test]
    fn test_edit_id_missing() {
        let err = edited_connection_id(None, &FormRecord::new()).unwrap_err();
        assert!(matches!(err, CliError::MissingConnectionId));
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "formgate",
            "transfer-create",
            "-f",
            "sourceId=1",
            "--json",
            "--base-url",
            "http://console:8080",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.base_url.as_deref(), Some("http://console:8080"));
        match cli.command {
            Commands::TransferCreate { form } => assert_eq!(form.fields, vec!["sourceId=1"]),
            _ => panic!("expected transfer-create"),
        }
    }

    #[test]
    fn test_allow_flag_overrides_policy() {
        let cli = Cli::try_parse_from(["formgate", "--allow-on-lookup-failure", "connection-create"])
            .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.lookup_failure, LookupFailurePolicy::Allow);
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(ExitCode::from(Outcome::Accepted), ExitCode::SUCCESS);
        assert_eq!(ExitCode::from(Outcome::Rejected), ExitCode::from(2));
    }
}
