use crate::{messages, rule_set::RuleSet};
use connectors::lookup::NameLookup;
use model::{
    core::{engine_kind::EngineKind, identifiers::ConnectionId},
    form::{FormKind, FormRecord, fields},
    validation::{LookupKind, ValidationResult, Violation},
};
use tracing::info;

/// Whether the form creates a connection or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionMode {
    Create,
    /// Editing the connection with this identifier; its own name is not a duplicate.
    Edit { self_id: ConnectionId },
}

/// Validates the connection details form.
pub struct ConnectionFormValidator<'a> {
    names: &'a dyn NameLookup,
    mode: ConnectionMode,
}

impl<'a> ConnectionFormValidator<'a> {
    pub fn new(names: &'a dyn NameLookup, mode: ConnectionMode) -> Self {
        Self { names, mode }
    }

    pub fn form_kind(&self) -> FormKind {
        match self.mode {
            ConnectionMode::Create => FormKind::ConnectionCreate,
            ConnectionMode::Edit { .. } => FormKind::ConnectionEdit,
        }
    }

    pub async fn validate(&self, record: &FormRecord) -> ValidationResult {
        let mut rules = RuleSet::new(record);

        rules.require(fields::DS_TYPE);
        self.validate_name(&mut rules).await;
        self.validate_credentials(&mut rules);

        // Exact match; any other non-empty dsType is host-based.
        if record.get(fields::DS_TYPE) == EngineKind::Snowflake.as_str() {
            Self::validate_snowflake(&mut rules);
        } else if record.is_set(fields::DS_TYPE) {
            Self::validate_host_based(&mut rules);
        }

        let result = rules.finish();
        info!(
            "Validated {} form: {} violation(s), {} unavailable lookup(s)",
            self.form_kind(),
            result.violations.len(),
            result.unavailable.len()
        );
        result
    }

    async fn validate_name(&self, rules: &mut RuleSet<'_>) {
        let name = rules.record().get(fields::NAME);
        if name.is_empty() {
            rules.flag(Violation::missing(fields::NAME));
            return;
        }

        match self.names.find_by_name(name).await {
            Ok(Some(existing)) if !self.is_self(&existing) => {
                rules.flag(Violation::with_message(
                    fields::NAME,
                    messages::NAME_NOT_UNIQUE,
                ));
            }
            Ok(_) => {}
            Err(err) => rules.lookup_failed(fields::NAME, LookupKind::NameUniqueness, &err),
        }
    }

    fn is_self(&self, existing: &ConnectionId) -> bool {
        match &self.mode {
            ConnectionMode::Create => false,
            ConnectionMode::Edit { self_id } => self_id == existing,
        }
    }

    fn validate_credentials(&self, rules: &mut RuleSet<'_>) {
        rules.require(fields::USERNAME);
        // An edit may keep the stored password.
        if self.mode == ConnectionMode::Create {
            rules.require(fields::PASSWORD);
        }
        rules.require(fields::DB_NAME);
    }

    fn validate_snowflake(rules: &mut RuleSet<'_>) {
        rules.require_with(fields::ACCOUNT_ID, messages::SNOWFLAKE_ACCOUNT_ID_REQUIRED);
        rules.forbid(fields::HOSTNAME, messages::SNOWFLAKE_NO_HOSTNAME);
        rules.forbid(fields::PORT, messages::SNOWFLAKE_NO_PORT);
    }

    fn validate_host_based(rules: &mut RuleSet<'_>) {
        rules.require_with(fields::HOSTNAME, messages::HOSTNAME_REQUIRED);
        rules.require_with(fields::PORT, messages::PORT_REQUIRED);

        let port = rules.record().get(fields::PORT);
        if !port.is_empty() {
            rules.check(
                port.trim().parse::<i64>().is_ok(),
                fields::PORT,
                messages::PORT_NOT_INTEGER,
            );
        }

        rules.forbid(fields::ACCOUNT_ID, messages::NO_ACCOUNT_ID);
    }
}

/// Validates the create-connection form; the name must not belong to any
/// existing connection.
pub async fn validate_connection_create(
    record: &FormRecord,
    names: &dyn NameLookup,
) -> ValidationResult {
    ConnectionFormValidator::new(names, ConnectionMode::Create)
        .validate(record)
        .await
}

/// Validates the edit-connection form for the connection `self_id`.
pub async fn validate_connection_edit(
    record: &FormRecord,
    names: &dyn NameLookup,
    self_id: &str,
) -> ValidationResult {
    let mode = ConnectionMode::Edit {
        self_id: ConnectionId::new(self_id),
    };
    ConnectionFormValidator::new(names, mode)
        .validate(record)
        .await
}
