use std::net::IpAddr;
use std::sync::Arc;

/// Origin of a client's hostname binding. Ordered by trust: a binding from a
/// higher source is never replaced by one from a lower source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClientSource {
    Rdns,
    Arp,
    Dhcp,
    Hosts,
}

impl ClientSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rdns => "rdns",
            Self::Arp => "arp",
            Self::Dhcp => "dhcp",
            Self::Hosts => "hosts",
        }
    }
}

/// A network client discovered by the DNS service, enriched with a resolved
/// hostname where one is available.
#[derive(Debug, Clone)]
pub struct Client {
    pub ip_address: IpAddr,
    pub hostname: Option<Arc<str>>,
    pub source: Option<ClientSource>,
}

impl Client {
    pub fn new(ip_address: IpAddr) -> Self {
        Self {
            ip_address,
            hostname: None,
            source: None,
        }
    }

    pub fn with_hostname(ip_address: IpAddr, hostname: &str, source: ClientSource) -> Self {
        Self {
            ip_address,
            hostname: Some(Arc::from(hostname)),
            source: Some(source),
        }
    }
}
