use serde::Serialize;
use std::{fmt, str::FromStr};

/// A field that failed a rule.
///
/// Presence-only failures carry no message; the caller renders a generic
/// "required" indicator for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Violation {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: None,
        }
    }

    pub fn with_message(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: Some(message.into()),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.field, message),
            None => write!(f, "{}: required", self.field),
        }
    }
}

/// The server round-trip a rule depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupKind {
    NameUniqueness,
    TargetEngine,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::NameUniqueness => write!(f, "name uniqueness lookup"),
            LookupKind::TargetEngine => write!(f, "target engine lookup"),
        }
    }
}

/// A rule left unevaluated because its lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupUnavailable {
    pub field: String,
    pub lookup: LookupKind,
    pub reason: String,
}

impl fmt::Display for LookupUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unavailable, '{}' could not be checked: {}",
            self.lookup, self.field, self.reason
        )
    }
}

/// What the submit gate does when a lookup could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupFailurePolicy {
    /// Refuse submission until every lookup has answered.
    #[default]
    Block,
    /// Submit anyway, treating unanswered lookups as passed.
    Allow,
}

impl FromStr for LookupFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "block" => Ok(LookupFailurePolicy::Block),
            "allow" => Ok(LookupFailurePolicy::Allow),
            other => Err(format!(
                "Unknown lookup failure policy '{other}' (expected 'block' or 'allow')"
            )),
        }
    }
}

/// Outcome of validating one form submission.
///
/// Violations keep the order in which rules first flagged their field, and
/// each field appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unavailable: Vec<LookupUnavailable>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation. A field flagged again keeps its position but takes
    /// the newer message.
    pub fn flag(&mut self, violation: Violation) {
        match self
            .violations
            .iter_mut()
            .find(|existing| existing.field == violation.field)
        {
            Some(existing) => existing.message = violation.message,
            None => self.violations.push(violation),
        }
    }

    pub fn add_unavailable(&mut self, unavailable: LookupUnavailable) {
        self.unavailable.push(unavailable);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_unavailable_lookups(&self) -> bool {
        !self.unavailable.is_empty()
    }

    pub fn violation(&self, field: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field == field)
    }

    pub fn is_flagged(&self, field: &str) -> bool {
        self.violation(field).is_some()
    }

    pub fn flagged_fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }

    /// Whether the form may be submitted under the given policy.
    pub fn permits_submission(&self, policy: LookupFailurePolicy) -> bool {
        match policy {
            LookupFailurePolicy::Block => self.is_valid() && !self.has_unavailable_lookups(),
            LookupFailurePolicy::Allow => self.is_valid(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() && self.unavailable.is_empty() {
            return write!(f, "No validation issues");
        }

        for violation in &self.violations {
            writeln!(f, "{violation}")?;
        }

        for unavailable in &self.unavailable {
            writeln!(f, "{unavailable}")?;
        }

        Ok(())
    }
}
