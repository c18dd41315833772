//! Resolver set for locally served networks.

use super::exchange::UdpExchanger;
use async_trait::async_trait;
use hickory_proto::op::Message;
use rdns_application::ports::DnsExchanger;
use rdns_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Statically configured resolvers for locally served networks, tried in
/// configured order until one answers. Immutable after construction; an
/// empty set is valid and means no local resolvers are configured.
pub struct LocalResolverSet {
    resolvers: Vec<Arc<dyn DnsExchanger>>,
}

impl std::fmt::Debug for LocalResolverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalResolverSet")
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}

impl LocalResolverSet {
    pub fn new(resolvers: Vec<Arc<dyn DnsExchanger>>) -> Self {
        Self { resolvers }
    }

    /// Build one UDP exchanger per address, all sharing the same timeout.
    pub fn from_addrs(addrs: &[String], timeout: Duration) -> Result<Self, DomainError> {
        let mut resolvers: Vec<Arc<dyn DnsExchanger>> = Vec::with_capacity(addrs.len());
        for addr in addrs {
            resolvers.push(Arc::new(UdpExchanger::from_addr(addr, timeout)?));
        }
        Ok(Self { resolvers })
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

#[async_trait]
impl DnsExchanger for LocalResolverSet {
    /// First usable response wins. Every individual failure is kept so the
    /// exhaustion error reports one entry per configured resolver.
    async fn exchange(&self, query: &Message) -> Result<Message, DomainError> {
        let mut errors = Vec::new();

        for resolver in &self.resolvers {
            match resolver.exchange(query).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    debug!(error = %e, "local resolver gave no answer");
                    errors.push(e);
                }
            }
        }

        Err(DomainError::LocalResolversExhausted { errors })
    }
}
