use async_trait::async_trait;
use hickory_proto::op::Message;
use rdns_domain::DomainError;

/// A single-shot DNS exchange: send a query message, get back the response
/// message. Implemented both by the upstream dispatcher and by the local
/// resolver set; the caller picks one at resolve time.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(&self, query: &Message) -> Result<Message, DomainError>;
}
