pub mod engine_kind;
pub mod identifiers;
