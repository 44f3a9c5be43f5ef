use crate::{error::ConfigError, retry::RetryPolicy};
use model::validation::LookupFailurePolicy;
use reqwest::Url;
use std::{collections::HashMap, str::FromStr, time::Duration};

pub const BASE_URL_VAR: &str = "FORMGATE_BASE_URL";
pub const TIMEOUT_MS_VAR: &str = "FORMGATE_TIMEOUT_MS";
pub const MAX_ATTEMPTS_VAR: &str = "FORMGATE_MAX_ATTEMPTS";
pub const RETRY_BASE_MS_VAR: &str = "FORMGATE_RETRY_BASE_MS";
pub const RETRY_MAX_MS_VAR: &str = "FORMGATE_RETRY_MAX_MS";
pub const LOOKUP_FAILURE_VAR: &str = "FORMGATE_LOOKUP_FAILURE";

const DEFAULT_BASE_URL: &str = "http://localhost:9000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for talking to the console and gating submissions on its answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub base_url: Url,
    /// Per-request timeout; a request that exceeds it counts as a failed lookup.
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub lookup_failure: LookupFailurePolicy,
}

impl ConsoleConfig {
    /// Default settings against the console at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self::with_base_url(parse_base_url(base_url)?))
    }

    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            lookup_failure: LookupFailurePolicy::default(),
        }
    }

    /// Builds the configuration from a set of environment variables; unset
    /// variables keep their defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = RetryPolicy::default();

        let base_url = parse_base_url(
            vars.get(BASE_URL_VAR)
                .map(String::as_str)
                .unwrap_or(DEFAULT_BASE_URL),
        )?;
        let timeout = read_millis(vars, TIMEOUT_MS_VAR)?.unwrap_or(DEFAULT_TIMEOUT);
        let max_attempts = read_parsed::<usize>(vars, MAX_ATTEMPTS_VAR)?
            .unwrap_or(defaults.max_attempts);
        let base_delay = read_millis(vars, RETRY_BASE_MS_VAR)?.unwrap_or(defaults.base_delay);
        let max_delay = read_millis(vars, RETRY_MAX_MS_VAR)?.unwrap_or(defaults.max_delay);
        let lookup_failure =
            read_parsed::<LookupFailurePolicy>(vars, LOOKUP_FAILURE_VAR)?.unwrap_or_default();

        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: TIMEOUT_MS_VAR.to_string(),
                value: "0".to_string(),
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            base_url,
            timeout,
            retry: RetryPolicy::new(max_attempts, base_delay, max_delay),
            lookup_failure,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }
}

/// Parses the console base URL, making sure it ends with `/` so that endpoint
/// paths are appended rather than replacing the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

fn read_parsed<T>(vars: &HashMap<String, String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match vars.get(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

fn read_millis(vars: &HashMap<String, String>, key: &str) -> Result<Option<Duration>, ConfigError> {
    Ok(read_parsed::<u64>(vars, key)?.map(Duration::from_millis))
}
