use async_trait::async_trait;
use rdns_domain::{ClientSource, DomainError};
use std::net::IpAddr;

#[async_trait]
pub trait ClientRegistry: Send + Sync {
    /// Check whether a client record from the given source already exists.
    async fn exists(&self, ip: IpAddr, source: ClientSource) -> bool;

    /// Upsert a resolved hostname. Returns `Ok(false)` when the registry
    /// declined the binding (e.g. a higher-trust source already holds it).
    async fn add_host(
        &self,
        ip: IpAddr,
        hostname: &str,
        source: ClientSource,
    ) -> Result<bool, DomainError>;
}
