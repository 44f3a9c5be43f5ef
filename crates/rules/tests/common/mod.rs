#![allow(dead_code)]

use async_trait::async_trait;
use connectors::{
    error::LookupError,
    lookup::{ConnectionMetadata, NameLookup},
};
use model::core::{engine_kind::EngineKind, identifiers::ConnectionId};
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Name lookup backed by a fixed table of taken names.
#[derive(Default)]
pub struct FakeNames {
    taken: HashMap<String, String>,
    down: bool,
    calls: AtomicUsize,
}

impl FakeNames {
    pub fn free() -> Self {
        Self::default()
    }

    pub fn taken(name: &str, id: &str) -> Self {
        let mut names = Self::default();
        names.taken.insert(name.to_string(), id.to_string());
        names
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NameLookup for FakeNames {
    async fn find_by_name(&self, name: &str) -> Result<Option<ConnectionId>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.down {
            return Err(LookupError::Timeout(
                "http://console.test/connections/find-by-name".to_string(),
            ));
        }
        Ok(self.taken.get(name).map(|id| ConnectionId::new(id.as_str())))
    }
}

/// Connection metadata backed by a fixed table of engine kinds.
#[derive(Default)]
pub struct FakeConnections {
    kinds: HashMap<String, EngineKind>,
    down: bool,
    calls: AtomicUsize,
}

impl FakeConnections {
    pub fn with(id: &str, kind: &str) -> Self {
        let mut connections = Self::default();
        connections.kinds.insert(id.to_string(), EngineKind::from(kind));
        connections
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectionMetadata for FakeConnections {
    async fn engine_kind(&self, id: &str) -> Result<EngineKind, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.down {
            return Err(LookupError::Status {
                status: 502,
                url: format!("http://console.test/connections/{id}"),
            });
        }
        self.kinds.get(id).cloned().ok_or_else(|| LookupError::Status {
            status: 404,
            url: format!("http://console.test/connections/{id}"),
        })
    }
}
