use crate::error::ModelError;
use serde::Serialize;
use std::{fmt::Display, str::FromStr};

pub mod fields;
pub mod record;

pub use record::FormRecord;

/// The console forms that carry client-side validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormKind {
    ConnectionCreate,
    ConnectionEdit,
    CreateTransfer,
}

impl FormKind {
    /// The HTML form the fields are read from.
    pub fn form_name(&self) -> &'static str {
        match self {
            FormKind::ConnectionCreate | FormKind::ConnectionEdit => "connectionDetails",
            FormKind::CreateTransfer => "createTransfer",
        }
    }
}

impl FromStr for FormKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "connection-create" | "create-connection" => Ok(FormKind::ConnectionCreate),
            "connection-edit" | "edit-connection" => Ok(FormKind::ConnectionEdit),
            "transfer-create" | "create-transfer" => Ok(FormKind::CreateTransfer),
            other => Err(ModelError::UnknownFormKind(other.to_string())),
        }
    }
}

impl Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormKind::ConnectionCreate => write!(f, "connection-create"),
            FormKind::ConnectionEdit => write!(f, "connection-edit"),
            FormKind::CreateTransfer => write!(f, "transfer-create"),
        }
    }
}
