//! rDNS Domain Layer
pub mod client;
pub mod config;
pub mod errors;

pub use client::{Client, ClientSource};
pub use config::{RdnsConfig, UpstreamConfig};
pub use errors::DomainError;
