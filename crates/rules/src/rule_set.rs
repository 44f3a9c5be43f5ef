use connectors::error::LookupError;
use model::{
    form::FormRecord,
    validation::{LookupKind, LookupUnavailable, ValidationResult, Violation},
};
use tracing::{debug, warn};

/// Accumulates rule outcomes for one form submission.
pub struct RuleSet<'a> {
    record: &'a FormRecord,
    result: ValidationResult,
}

impl<'a> RuleSet<'a> {
    pub fn new(record: &'a FormRecord) -> Self {
        Self {
            record,
            result: ValidationResult::new(),
        }
    }

    pub fn record(&self) -> &'a FormRecord {
        self.record
    }

    /// Flags `field` without a message when it is empty.
    pub fn require(&mut self, field: &str) {
        if !self.record.is_set(field) {
            self.flag(Violation::missing(field));
        }
    }

    /// Flags `field` with `message` when it is empty.
    pub fn require_with(&mut self, field: &str, message: &str) {
        if !self.record.is_set(field) {
            self.flag(Violation::with_message(field, message));
        }
    }

    /// Flags `field` with `message` when it is set.
    pub fn forbid(&mut self, field: &str, message: &str) {
        if self.record.is_set(field) {
            self.flag(Violation::with_message(field, message));
        }
    }

    /// Flags `field` with `message` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.flag(Violation::with_message(field, message));
        }
    }

    pub fn flag(&mut self, violation: Violation) {
        debug!("Rule failed: {violation}");
        self.result.flag(violation);
    }

    /// Records that the rule on `field` could not be evaluated.
    pub fn lookup_failed(&mut self, field: &str, lookup: LookupKind, err: &LookupError) {
        warn!("Could not check '{field}', {lookup} failed: {err}");
        self.result.add_unavailable(LookupUnavailable {
            field: field.to_string(),
            lookup,
            reason: err.to_string(),
        });
    }

    pub fn finish(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_require_and_forbid() {
        let record = FormRecord::new()
            .with("hostname", "db.internal")
            .with("accountId", "");
        let mut rules = RuleSet::new(&record);

        rules.require("hostname");
        rules.require("accountId");
        rules.forbid("hostname", "no hostname here");
        rules.forbid("accountId", "no account here");

        let result = rules.finish();
        assert_eq!(
            result.violations,
            vec![
                Violation::missing("accountId"),
                Violation::with_message("hostname", "no hostname here"),
            ]
        );
    }

    #[traced_test]
    #[test]
    fn test_lookup_failure_is_not_a_violation() {
        let record = FormRecord::new();
        let mut rules = RuleSet::new(&record);
        rules.lookup_failed(
            "name",
            LookupKind::NameUniqueness,
            &LookupError::Timeout("http://console/".into()),
        );

        let result = rules.finish();
        assert!(result.is_valid());
        assert_eq!(result.unavailable.len(), 1);
        assert_eq!(result.unavailable[0].field, "name");
        assert!(logs_contain("Could not check 'name'"));
    }
}
