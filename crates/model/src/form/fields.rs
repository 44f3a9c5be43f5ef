//! Field names as they appear in the console's HTML forms.

pub const ID: &str = "id";
pub const DS_TYPE: &str = "dsType";
pub const NAME: &str = "name";
pub const HOSTNAME: &str = "hostname";
pub const PORT: &str = "port";
pub const ACCOUNT_ID: &str = "accountId";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const DB_NAME: &str = "dbName";

pub const SOURCE_ID: &str = "sourceId";
pub const TARGET_ID: &str = "targetId";
pub const TARGET_SCHEMA: &str = "targetSchema";
pub const TARGET_TABLE: &str = "targetTable";
pub const QUERY: &str = "query";
pub const OVERWRITE: &str = "overwrite";

/// Id of the DOM element that wraps a field's input.
pub fn element_id(field: &str) -> String {
    format!("{field}-field")
}
