use crate::{error::ModelError, form::fields};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, str::FromStr};

/// Field values of one form, captured at submission time.
///
/// An empty string means "unset"; a field that was never captured reads the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    values: HashMap<String, String>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Returns the field value, or `""` when the field is unset.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn is_set(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    /// Copies every field of `other` into this record, replacing existing values.
    pub fn merge(&mut self, other: FormRecord) {
        self.values.extend(other.values);
    }

    /// Parses a list of `KEY=VALUE` assignments. Later assignments win.
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::new();
        for assignment in assignments {
            let (field, value) = parse_assignment(assignment.as_ref())?;
            record.set(field, value);
        }
        Ok(record)
    }
}

impl<K, V> FromIterator<(K, V)> for FormRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

impl FromStr for FormRecord {
    type Err = ModelError;

    /// Parses `&`-separated `KEY=VALUE` pairs, as in an urlencoded form body
    /// (without percent-decoding).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_assignments(s.split('&').filter(|part| !part.is_empty()))
    }
}

fn parse_assignment(assignment: &str) -> Result<(&str, &str), ModelError> {
    let (field, value) = assignment
        .split_once('=')
        .ok_or_else(|| ModelError::MalformedField(assignment.to_string()))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(ModelError::EmptyFieldName(assignment.to_string()));
    }

    Ok((field, value))
}
