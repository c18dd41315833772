//! Upstream dispatcher used for addresses outside locally served networks.

use super::exchange::UdpExchanger;
use async_trait::async_trait;
use hickory_proto::op::Message;
use rdns_application::ports::DnsExchanger;
use rdns_domain::{DomainError, UpstreamConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Failover dispatcher over the configured upstream servers: each query is
/// tried against the servers in order and the first success wins.
pub struct UpstreamResolver {
    servers: Vec<Arc<dyn DnsExchanger>>,
}

impl UpstreamResolver {
    pub fn new(servers: Vec<Arc<dyn DnsExchanger>>) -> Self {
        Self { servers }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let timeout = Duration::from_millis(config.exchange_timeout_ms);
        let mut servers: Vec<Arc<dyn DnsExchanger>> = Vec::with_capacity(config.servers.len());
        for addr in &config.servers {
            servers.push(Arc::new(UdpExchanger::from_addr(addr, timeout)?));
        }
        Ok(Self { servers })
    }
}

#[async_trait]
impl DnsExchanger for UpstreamResolver {
    async fn exchange(&self, query: &Message) -> Result<Message, DomainError> {
        let mut last_error = DomainError::NoUpstreamServers;

        for server in &self.servers {
            match server.exchange(query).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(error = %e, "upstream exchange failed, trying next");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
