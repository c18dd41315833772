use std::net::IpAddr;

/// Pure predicate deciding whether an address belongs to a locally served
/// network, i.e. whether its reverse zone is answered by the local resolvers
/// rather than public upstream DNS.
pub trait NetworkClassifier: Send + Sync {
    fn is_locally_served(&self, ip: IpAddr) -> bool;
}
