use model::{
    form::fields,
    validation::{LookupFailurePolicy, ValidationResult},
};
use serde::Serialize;
use std::fmt;

pub const SUCCESS_BANNER: &str = "conn-success";
pub const FAILURE_BANNER: &str = "conn-failed";

/// What the page shows after a submission attempt: which inputs are marked
/// invalid, which alerts pop up, and whether the form goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFeedback {
    pub invalid_elements: Vec<String>,
    pub alerts: Vec<String>,
    pub submit: bool,
}

impl FormFeedback {
    pub fn from_result(result: &ValidationResult, policy: LookupFailurePolicy) -> Self {
        let mut invalid_elements: Vec<String> = result
            .flagged_fields()
            .map(fields::element_id)
            .collect();

        let mut alerts: Vec<String> = result
            .violations
            .iter()
            .filter_map(|v| v.message.clone())
            .collect();

        for unavailable in &result.unavailable {
            alerts.push(format!(
                "Could not check '{}' right now ({}). Please try again.",
                unavailable.field, unavailable.lookup
            ));
            if policy == LookupFailurePolicy::Block {
                let element = fields::element_id(&unavailable.field);
                if !invalid_elements.contains(&element) {
                    invalid_elements.push(element);
                }
            }
        }

        Self {
            invalid_elements,
            alerts,
            submit: result.permits_submission(policy),
        }
    }
}

impl fmt::Display for FormFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.submit {
            writeln!(f, "OK: form may be submitted")?;
        } else {
            writeln!(f, "REJECTED: form must not be submitted")?;
        }
        for element in &self.invalid_elements {
            writeln!(f, "  invalid: #{element}")?;
        }
        for alert in &self.alerts {
            writeln!(f, "  alert: {alert}")?;
        }
        Ok(())
    }
}

/// Banner state after a connection test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionTestBanner {
    Success,
    Failed,
    /// The console could not be asked; neither banner is shown.
    Unavailable,
}

impl ConnectionTestBanner {
    pub fn from_outcome<E>(outcome: &Result<bool, E>) -> Self {
        match outcome {
            Ok(true) => ConnectionTestBanner::Success,
            Ok(false) => ConnectionTestBanner::Failed,
            Err(_) => ConnectionTestBanner::Unavailable,
        }
    }

    /// Id of the banner element to reveal, if any.
    pub fn element_id(&self) -> Option<&'static str> {
        match self {
            ConnectionTestBanner::Success => Some(SUCCESS_BANNER),
            ConnectionTestBanner::Failed => Some(FAILURE_BANNER),
            ConnectionTestBanner::Unavailable => None,
        }
    }
}
