use thiserror::Error;

/// Failure to obtain an answer from one of the console lookups.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be sent or the connection broke.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// No response arrived within the configured timeout.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// The console answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The console answered, but the body could not be understood.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A request URL could not be built from the configured base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Every attempt failed with a retryable error.
    #[error("Lookup failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: usize,
        last: Box<LookupError>,
    },
}

impl LookupError {
    pub fn is_retryable(&self) -> bool {
        match self {
            LookupError::Transport(_) | LookupError::Timeout(_) => true,
            LookupError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Errors raised when reading client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
