//! Single-server UDP exchange.

use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rdns_application::ports::DnsExchanger;
use rdns_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

/// Exchanges one DNS query with one resolver endpoint over UDP, bounded by a
/// fixed timeout configured at construction.
pub struct UdpExchanger {
    server: SocketAddr,
    timeout: Duration,
}

impl UdpExchanger {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self { server, timeout }
    }

    /// Parse a resolver address string; a bare IP gets the default DNS port.
    pub fn from_addr(addr: &str, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self::new(parse_server_addr(addr)?, timeout))
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }
}

pub(crate) fn parse_server_addr(addr: &str) -> Result<SocketAddr, DomainError> {
    if let Ok(sa) = addr.parse::<SocketAddr>() {
        return Ok(sa);
    }
    if let Ok(ip) = addr.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, 53));
    }
    Err(DomainError::ConfigError(format!(
        "invalid resolver address: {addr}"
    )))
}

pub(crate) fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::InvalidDnsResponse(format!("serializing query: {e}")))?;
    Ok(buf)
}

#[async_trait]
impl DnsExchanger for UdpExchanger {
    async fn exchange(&self, query: &Message) -> Result<Message, DomainError> {
        let request = serialize_message(query)?;

        let bind_addr = if self.server.is_ipv4() {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        } else {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("binding socket: {e}")))?;

        socket.connect(self.server).await.map_err(|e| {
            DomainError::ExchangeFailed {
                server: self.server.to_string(),
                reason: format!("connect: {e}"),
            }
        })?;

        socket
            .send(&request)
            .await
            .map_err(|e| DomainError::ExchangeFailed {
                server: self.server.to_string(),
                reason: format!("send: {e}"),
            })?;

        let mut buf = vec![0u8; 4096];
        let len = tokio::time::timeout(self.timeout, socket.recv(&mut buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::ExchangeFailed {
                server: self.server.to_string(),
                reason: format!("recv: {e}"),
            })?;

        Message::from_vec(&buf[..len])
            .map_err(|e| DomainError::InvalidDnsResponse(format!("parsing response: {e}")))
    }
}
