use std::{fmt, sync::Arc};

/// Identifier of a stored connection, as returned by the console.
///
/// The console reports identifiers as plain strings; the literal `"0"` is its
/// "no such connection" sentinel and never names a real record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionId(Arc<str>);

impl ConnectionId {
    pub const NOT_FOUND: &'static str = "0";

    pub fn new(id: impl Into<String>) -> Self {
        Self(Arc::from(id.into().trim()))
    }

    /// Parses a raw lookup body, mapping the sentinel (and an empty body) to `None`.
    pub fn from_lookup(raw: &str) -> Option<Self> {
        let raw = raw.trim().trim_matches('"').trim();
        if raw.is_empty() || raw == Self::NOT_FOUND {
            None
        } else {
            Some(Self::new(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ConnectionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ConnectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
