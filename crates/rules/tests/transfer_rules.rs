mod common;

use common::FakeConnections;
use model::{
    form::{FormRecord, fields},
    validation::{LookupFailurePolicy, LookupKind, Violation},
};
use rules::{messages, validate_create_transfer};

fn transfer_record(target_schema: &str) -> FormRecord {
    FormRecord::new()
        .with(fields::SOURCE_ID, "1")
        .with(fields::TARGET_ID, "2")
        .with(fields::TARGET_SCHEMA, target_schema)
        .with(fields::TARGET_TABLE, "orders")
        .with(fields::QUERY, "select * from orders")
        .with(fields::OVERWRITE, "true")
}

#[tokio::test]
async fn test_complete_transfer_passes() {
    let connections = FakeConnections::with("2", "postgresql");
    let result = validate_create_transfer(&transfer_record("public"), &connections).await;

    assert!(result.is_valid());
    assert!(!result.has_unavailable_lookups());
}

#[tokio::test]
async fn test_mysql_target_needs_no_schema() {
    let connections = FakeConnections::with("2", "mysql");
    let result = validate_create_transfer(&transfer_record(""), &connections).await;

    assert!(result.is_valid());
    assert!(!result.is_flagged(fields::TARGET_SCHEMA));
    assert_eq!(connections.calls(), 1);
}

#[tokio::test]
async fn test_snowflake_target_needs_schema() {
    let connections = FakeConnections::with("2", "snowflake");
    let result = validate_create_transfer(&transfer_record(""), &connections).await;

    assert_eq!(
        result.violations,
        vec![Violation::with_message(
            fields::TARGET_SCHEMA,
            "If your target connection is of type snowflake, you must specify a target schema."
        )]
    );
}

#[tokio::test]
async fn test_every_schema_engine_needs_schema() {
    for kind in ["postgresql", "mssql", "snowflake", "redshift"] {
        let connections = FakeConnections::with("2", kind);
        let result = validate_create_transfer(&transfer_record(""), &connections).await;
        assert!(result.is_flagged(fields::TARGET_SCHEMA), "{kind}");
    }
    for kind in ["mysql", "oracle"] {
        let connections = FakeConnections::with("2", kind);
        let result = validate_create_transfer(&transfer_record(""), &connections).await;
        assert!(!result.is_flagged(fields::TARGET_SCHEMA), "{kind}");
    }
}

#[tokio::test]
async fn test_empty_form_flags_required_fields_in_order() {
    let connections = FakeConnections::default();
    let result = validate_create_transfer(&FormRecord::new(), &connections).await;

    assert_eq!(
        result.violations,
        vec![
            Violation::missing(fields::SOURCE_ID),
            Violation::missing(fields::TARGET_ID),
            Violation::missing(fields::TARGET_TABLE),
            Violation::missing(fields::QUERY),
            Violation::missing(fields::OVERWRITE),
        ]
    );
    assert_eq!(connections.calls(), 0);
}

#[tokio::test]
async fn test_presence_and_schema_checks_both_fire() {
    let connections = FakeConnections::with("2", "redshift");
    let record = transfer_record("")
        .with(fields::QUERY, "")
        .with(fields::OVERWRITE, "");
    let result = validate_create_transfer(&record, &connections).await;

    assert_eq!(
        result.flagged_fields().collect::<Vec<_>>(),
        vec![fields::QUERY, fields::OVERWRITE, fields::TARGET_SCHEMA]
    );
    assert_eq!(
        result.violation(fields::TARGET_SCHEMA).unwrap().message,
        Some(messages::target_schema_required(&"redshift"))
    );
}

#[tokio::test]
async fn test_any_overwrite_value_counts_as_present() {
    let connections = FakeConnections::with("2", "mysql");
    for value in ["on", "yes", "true", "false"] {
        let record = transfer_record("").with(fields::OVERWRITE, value);
        let result = validate_create_transfer(&record, &connections).await;
        assert!(result.violations.is_empty(), "overwrite={value}");
    }
}

#[tokio::test]
async fn test_given_schema_skips_engine_lookup() {
    let connections = FakeConnections::down();
    let result = validate_create_transfer(&transfer_record("public"), &connections).await;

    assert!(result.permits_submission(LookupFailurePolicy::Block));
    assert_eq!(connections.calls(), 0);
}

#[tokio::test]
async fn test_engine_lookup_failure_is_reported() {
    let connections = FakeConnections::down();
    let result = validate_create_transfer(&transfer_record(""), &connections).await;

    assert!(result.is_valid());
    assert_eq!(result.unavailable.len(), 1);
    assert_eq!(result.unavailable[0].field, fields::TARGET_SCHEMA);
    assert_eq!(result.unavailable[0].lookup, LookupKind::TargetEngine);
    assert!(result.unavailable[0].reason.contains("502"));
    assert!(!result.permits_submission(LookupFailurePolicy::Block));
}

#[tokio::test]
async fn test_transfer_validation_is_idempotent() {
    let connections = FakeConnections::with("2", "mssql");
    let record = transfer_record("").with(fields::SOURCE_ID, "");

    let first = validate_create_transfer(&record, &connections).await;
    let second = validate_create_transfer(&record, &connections).await;
    assert_eq!(first, second);
    assert_eq!(first.violations.len(), 2);
}
