use thiserror::Error;

/// Errors raised while building model values from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A `key=value` field assignment was missing its `=`.
    #[error("Malformed field assignment '{0}' (expected KEY=VALUE)")]
    MalformedField(String),

    /// A field assignment had an empty key.
    #[error("Empty field name in assignment '{0}'")]
    EmptyFieldName(String),

    /// The requested form kind is not one the console knows.
    #[error("Unknown form kind: {0}")]
    UnknownFormKind(String),
}
