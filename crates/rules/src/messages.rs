//! User-facing messages for conditional and cross-field rules.

pub const NAME_NOT_UNIQUE: &str =
    "Connection name not unique. Please choose a connection name that doesn't already exist.";

pub const SNOWFLAKE_ACCOUNT_ID_REQUIRED: &str =
    "Must enter an Account ID when creating Snowflake connection.";
pub const SNOWFLAKE_NO_HOSTNAME: &str =
    "Do not enter a hostname when creating a Snowflake connection.";
pub const SNOWFLAKE_NO_PORT: &str =
    "Do not enter a port number when creating a Snowflake connection.";

pub const HOSTNAME_REQUIRED: &str =
    "Must enter a hostname when creating any DB type other than Snowflake.";
pub const PORT_REQUIRED: &str =
    "Must enter a port number when creating any DB type other than Snowflake.";
pub const PORT_NOT_INTEGER: &str = "The port number must be an integer";
pub const NO_ACCOUNT_ID: &str =
    "Do not enter an account ID unless you are creating a Snowflake connection.";

pub fn target_schema_required(kind: &impl std::fmt::Display) -> String {
    format!("If your target connection is of type {kind}, you must specify a target schema.")
}
