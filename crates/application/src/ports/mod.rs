mod client_registry;
mod dns_exchanger;
mod network_classifier;

pub use client_registry::ClientRegistry;
pub use dns_exchanger::DnsExchanger;
pub use network_classifier::NetworkClassifier;
