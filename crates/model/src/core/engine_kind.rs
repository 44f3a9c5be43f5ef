use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{convert::Infallible, fmt::Display, str::FromStr};

/// The type of database or warehouse a connection targets (`dsType`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EngineKind {
    #[default]
    Unspecified,
    Snowflake,
    Postgresql,
    Mssql,
    Redshift,
    Mysql,
    Oracle,
    Other(String),
}

/// Engines that need a destination schema when used as a transfer target.
pub const NEEDS_SCHEMA: [EngineKind; 4] = [
    EngineKind::Postgresql,
    EngineKind::Mssql,
    EngineKind::Snowflake,
    EngineKind::Redshift,
];

impl EngineKind {
    pub fn as_str(&self) -> &str {
        match self {
            EngineKind::Unspecified => "",
            EngineKind::Snowflake => "snowflake",
            EngineKind::Postgresql => "postgresql",
            EngineKind::Mssql => "mssql",
            EngineKind::Redshift => "redshift",
            EngineKind::Mysql => "mysql",
            EngineKind::Oracle => "oracle",
            EngineKind::Other(name) => name,
        }
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, EngineKind::Unspecified)
    }

    pub fn needs_schema(&self) -> bool {
        NEEDS_SCHEMA.contains(self)
    }
}

impl FromStr for EngineKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_lowercase().as_str() {
            "" => EngineKind::Unspecified,
            "snowflake" => EngineKind::Snowflake,
            "postgresql" => EngineKind::Postgresql,
            "mssql" => EngineKind::Mssql,
            "redshift" => EngineKind::Redshift,
            "mysql" => EngineKind::Mysql,
            "oracle" => EngineKind::Oracle,
            other => EngineKind::Other(other.to_string()),
        };
        Ok(kind)
    }
}

impl From<&str> for EngineKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EngineKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EngineKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EngineKind::from(raw.as_str()))
    }
}
