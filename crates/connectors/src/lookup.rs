use crate::error::LookupError;
use async_trait::async_trait;
use model::{
    core::{engine_kind::EngineKind, identifiers::ConnectionId},
    execution::connection::ConnectionTestRequest,
};

/// Resolves a proposed connection name to the connection already using it.
#[async_trait]
pub trait NameLookup: Send + Sync {
    /// Returns `None` when no connection has this name.
    async fn find_by_name(&self, name: &str) -> Result<Option<ConnectionId>, LookupError>;
}

/// Reads the declared engine kind of a stored connection.
#[async_trait]
pub trait ConnectionMetadata: Send + Sync {
    async fn engine_kind(&self, id: &str) -> Result<EngineKind, LookupError>;
}

/// Asks the console to try connecting with the given details.
#[async_trait]
pub trait ConnectionTester: Send + Sync {
    /// Returns whether the console managed to connect.
    async fn test_connection(&self, request: &ConnectionTestRequest) -> Result<bool, LookupError>;
}
