use crate::error::CliError;
use model::{
    form::FormKind,
    validation::{LookupFailurePolicy, ValidationResult},
};
use rules::feedback::{ConnectionTestBanner, FormFeedback};
use serde::Serialize;
use std::{fmt, path::Path};

/// Validation outcome for one form, as printed by the CLI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub form: FormKind,
    pub result: ValidationResult,
    pub feedback: FormFeedback,
}

impl ValidationReport {
    pub fn new(form: FormKind, result: ValidationResult, policy: LookupFailurePolicy) -> Self {
        let feedback = FormFeedback::from_result(&result, policy);
        Self {
            form,
            result,
            feedback,
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Form: {}", self.form)?;
        write!(f, "{}", self.feedback)
    }
}

/// Outcome of a connection test, as printed by the CLI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTestReport {
    pub banner: ConnectionTestBanner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for ConnectionTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.banner {
            ConnectionTestBanner::Success => writeln!(f, "Connection test succeeded")?,
            ConnectionTestBanner::Failed => writeln!(f, "Connection test failed")?,
            ConnectionTestBanner::Unavailable => writeln!(f, "Connection test could not be run")?,
        }
        if let Some(error) = &self.error {
            writeln!(f, "  error: {error}")?;
        }
        Ok(())
    }
}

/// Writes `report` as JSON to `path`, or prints it to stdout as JSON or text.
pub async fn emit<T>(report: &T, json: bool, path: Option<&Path>) -> Result<(), CliError>
where
    T: Serialize + fmt::Display,
{
    match path {
        Some(path) => {
            let body = serde_json::to_string_pretty(report)?;
            tokio::fs::write(path, body).await?;
        }
        None if json => println!("{}", serde_json::to_string_pretty(report)?),
        None => print!("{report}"),
    }
    Ok(())
}
