use connectors::error::{ConfigError, LookupError};
use model::error::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid env file: {0}")]
    EnvFile(String),

    #[error("Invalid form input: {0}")]
    Form(#[from] ModelError),

    #[error("Console request failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Failed to serialize output as JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Missing connection id: pass --id or set the 'id' field")]
    MissingConnectionId,
}
