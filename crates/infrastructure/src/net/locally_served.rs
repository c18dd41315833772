//! Locally served network detection (RFC 6303).

use ipnetwork::{Ipv4Network, Ipv6Network};
use rdns_application::ports::NetworkClassifier;
use std::net::IpAddr;

/// Address ranges whose reverse zones are served locally rather than by
/// public upstream DNS. See RFC 6303, "Locally Served DNS Zones".
const V4_RANGES: &[&str] = &[
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "127.0.0.0/8",
    "0.0.0.0/8",
    "169.254.0.0/16",
    "192.0.2.0/24",
    "198.51.100.0/24",
    "203.0.113.0/24",
    "255.255.255.255/32",
];

const V6_RANGES: &[&str] = &[
    "::/128",
    "::1/128",
    "fd00::/8",
    "fe80::/10",
    "2001:db8::/32",
];

pub struct LocallyServedNetworks {
    v4: Vec<Ipv4Network>,
    v6: Vec<Ipv6Network>,
}

impl LocallyServedNetworks {
    pub fn new() -> Self {
        Self {
            v4: V4_RANGES.iter().filter_map(|s| s.parse().ok()).collect(),
            v6: V6_RANGES.iter().filter_map(|s| s.parse().ok()).collect(),
        }
    }
}

impl Default for LocallyServedNetworks {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkClassifier for LocallyServedNetworks {
    fn is_locally_served(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(addr) => self.v4.iter().any(|net| net.contains(addr)),
            IpAddr::V6(addr) => self.v6.iter().any(|net| net.contains(addr)),
        }
    }
}
