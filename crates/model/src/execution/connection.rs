use crate::{
    core::engine_kind::EngineKind,
    form::{FormRecord, fields},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /connections/test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTestRequest {
    pub ds_type: String,
    pub hostname: String,
    /// `None` when the form's port does not start with an integer; sent as `null`.
    pub port: Option<i64>,
    pub account_id: String,
    pub ds_name: String,
    pub username: String,
    pub password: String,
    pub db_name: String,
}

impl ConnectionTestRequest {
    pub fn from_record(record: &FormRecord) -> Self {
        Self {
            ds_type: record.get(fields::DS_TYPE).to_string(),
            hostname: record.get(fields::HOSTNAME).to_string(),
            port: parse_leading_int(record.get(fields::PORT)),
            account_id: record.get(fields::ACCOUNT_ID).to_string(),
            ds_name: record.get(fields::NAME).to_string(),
            username: record.get(fields::USERNAME).to_string(),
            password: record.get(fields::PASSWORD).to_string(),
            db_name: record.get(fields::DB_NAME).to_string(),
        }
    }
}

/// Reads an optional sign and the leading run of digits, ignoring whatever
/// follows (`"5432/tcp"` reads as 5432).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'-') => (-1, &raw[1..]),
        Some(b'+') => (1, &raw[1..]),
        _ => (1, raw),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}

#[derive(Debug, Clone, Deserialize)]
struct ConnectionFields {
    // A body carrying both spellings is rejected as a duplicate field.
    #[serde(rename = "DsType", alias = "dsType")]
    ds_type: EngineKind,
}

/// Body of `GET /connections/{id}`, either bare or wrapped in a `connection` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ConnectionBody {
    Envelope { connection: ConnectionFields },
    Bare(ConnectionFields),
}

/// The part of a stored connection the validators care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDetails {
    pub ds_type: EngineKind,
}

impl ConnectionDetails {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let fields = match serde_json::from_str::<ConnectionBody>(body)? {
            ConnectionBody::Envelope { connection } => connection,
            ConnectionBody::Bare(fields) => fields,
        };
        Ok(Self {
            ds_type: fields.ds_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_from_record() {
        let record = FormRecord::new()
            .with(fields::DS_TYPE, "mysql")
            .with(fields::NAME, "orders")
            .with(fields::HOSTNAME, "db.internal")
            .with(fields::PORT, "3306")
            .with(fields::USERNAME, "etl")
            .with(fields::PASSWORD, "secret")
            .with(fields::DB_NAME, "shop");

        let value = serde_json::to_value(ConnectionTestRequest::from_record(&record)).unwrap();
        assert_eq!(
            value,
            json!({
                "dsType": "mysql",
                "hostname": "db.internal",
                "port": 3306,
                "accountId": "",
                "dsName": "orders",
                "username": "etl",
                "password": "secret",
                "dbName": "shop",
            })
        );
    }

    #[test]
    fn test_unparseable_port_is_null() {
        let record = FormRecord::new().with(fields::PORT, "abc");
        let request = ConnectionTestRequest::from_record(&record);
        assert_eq!(request.port, None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["port"], serde_json::Value::Null);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("5432"), Some(5432));
        assert_eq!(parse_leading_int(" 5432/tcp"), Some(5432));
        assert_eq!(parse_leading_int("-1"), Some(-1));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("x1"), None);
    }

    #[test]
    fn test_connection_details_shapes() {
        let bare = ConnectionDetails::from_json(r#"{"ID": 3, "DsType": "snowflake"}"#).unwrap();
        assert_eq!(bare.ds_type, EngineKind::Snowflake);

        let camel = ConnectionDetails::from_json(r#"{"dsType": "mysql"}"#).unwrap();
        assert_eq!(camel.ds_type, EngineKind::Mysql);

        let wrapped =
            ConnectionDetails::from_json(r#"{"connection": {"DsType": "mssql"}}"#).unwrap();
        assert_eq!(wrapped.ds_type, EngineKind::Mssql);

        assert!(ConnectionDetails::from_json(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_both_engine_spellings_are_rejected() {
        let err = ConnectionDetails::from_json(r#"{"DsType": "mysql", "dsType": "mysql"}"#);
        assert!(err.is_err());
    }
}
