use crate::{messages, rule_set::RuleSet};
use connectors::lookup::ConnectionMetadata;
use model::{
    form::{FormKind, FormRecord, fields},
    validation::{LookupKind, ValidationResult, Violation},
};
use tracing::{debug, info};

const REQUIRED: [&str; 5] = [
    fields::SOURCE_ID,
    fields::TARGET_ID,
    fields::TARGET_TABLE,
    fields::QUERY,
    fields::OVERWRITE,
];

/// Validates the create-transfer form.
pub struct TransferFormValidator<'a> {
    connections: &'a dyn ConnectionMetadata,
}

impl<'a> TransferFormValidator<'a> {
    pub fn new(connections: &'a dyn ConnectionMetadata) -> Self {
        Self { connections }
    }

    pub async fn validate(&self, record: &FormRecord) -> ValidationResult {
        let mut rules = RuleSet::new(record);

        for field in REQUIRED {
            rules.require(field);
        }
        self.validate_target_schema(&mut rules).await;

        let result = rules.finish();
        info!(
            "Validated {} form: {} violation(s), {} unavailable lookup(s)",
            FormKind::CreateTransfer,
            result.violations.len(),
            result.unavailable.len()
        );
        result
    }

    /// Targets whose engine keeps tables in schemas need `targetSchema`.
    async fn validate_target_schema(&self, rules: &mut RuleSet<'_>) {
        let record = rules.record();
        let target_id = record.get(fields::TARGET_ID);

        // The engine only matters when no schema was given.
        if target_id.is_empty() || record.is_set(fields::TARGET_SCHEMA) {
            return;
        }

        match self.connections.engine_kind(target_id).await {
            Ok(kind) if kind.needs_schema() => rules.flag(Violation::with_message(
                fields::TARGET_SCHEMA,
                messages::target_schema_required(&kind),
            )),
            Ok(kind) => debug!("Target engine '{kind}' does not need a schema"),
            Err(err) => {
                rules.lookup_failed(fields::TARGET_SCHEMA, LookupKind::TargetEngine, &err)
            }
        }
    }
}

/// Validates the create-transfer form, resolving the target connection's
/// engine to decide whether a schema is required.
pub async fn validate_create_transfer(
    record: &FormRecord,
    connections: &dyn ConnectionMetadata,
) -> ValidationResult {
    TransferFormValidator::new(connections)
        .validate(record)
        .await
}
