//! In-memory client registry backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use rdns_application::ports::ClientRegistry;
use rdns_domain::{Client, ClientSource, DomainError};
use std::net::IpAddr;
use std::sync::Arc;

/// Keeps discovered clients in memory. A hostname binding from a
/// higher-trust source is never replaced by one from a lower-trust source.
pub struct InMemoryClientRegistry {
    clients: DashMap<IpAddr, Client>,
}

impl InMemoryClientRegistry {
    pub fn new() -> Self {
        Self {
            clients: DashMap::new(),
        }
    }

    pub fn get(&self, ip: IpAddr) -> Option<Client> {
        self.clients.get(&ip).map(|entry| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for InMemoryClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRegistry for InMemoryClientRegistry {
    async fn exists(&self, ip: IpAddr, source: ClientSource) -> bool {
        self.clients
            .get(&ip)
            .map(|client| client.source.is_some_and(|s| s >= source))
            .unwrap_or(false)
    }

    async fn add_host(
        &self,
        ip: IpAddr,
        hostname: &str,
        source: ClientSource,
    ) -> Result<bool, DomainError> {
        let mut entry = self.clients.entry(ip).or_insert_with(|| Client::new(ip));

        if entry.source.is_some_and(|existing| existing > source) {
            return Ok(false);
        }

        entry.hostname = Some(Arc::from(hostname));
        entry.source = Some(source);
        Ok(true)
    }
}
