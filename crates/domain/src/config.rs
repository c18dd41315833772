use crate::DomainError;
use serde::{Deserialize, Serialize};

/// Reverse-resolution subsystem settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RdnsConfig {
    /// Maximum number of addresses remembered between resolution attempts.
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,

    /// How long a resolved (or failed) address is suppressed, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Capacity of the pending-resolution queue. Admissions beyond this are
    /// dropped, not queued.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Resolvers for addresses inside locally served networks. Empty means
    /// none are configured.
    #[serde(default)]
    pub local_resolvers: Vec<String>,

    /// Per-exchange timeout for local resolvers, in milliseconds.
    #[serde(default = "default_local_timeout_ms")]
    pub exchange_timeout_ms: u64,
}

impl Default for RdnsConfig {
    fn default() -> Self {
        Self {
            cache_size: default_cache_size(),
            cache_ttl_secs: default_cache_ttl_secs(),
            queue_capacity: default_queue_capacity(),
            local_resolvers: Vec::new(),
            exchange_timeout_ms: default_local_timeout_ms(),
        }
    }
}

impl RdnsConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, DomainError> {
        toml::from_str(s).map_err(|e| DomainError::ConfigError(e.to_string()))
    }
}

/// Upstream dispatcher settings for addresses outside locally served
/// networks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    pub servers: Vec<String>,

    #[serde(default = "default_upstream_timeout_ms")]
    pub exchange_timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, DomainError> {
        toml::from_str(s).map_err(|e| DomainError::ConfigError(e.to_string()))
    }
}

fn default_cache_size() -> usize {
    10_000
}

fn default_cache_ttl_secs() -> u64 {
    3_600
}

fn default_queue_capacity() -> usize {
    256
}

fn default_local_timeout_ms() -> u64 {
    1_000
}

fn default_upstream_timeout_ms() -> u64 {
    5_000
}
