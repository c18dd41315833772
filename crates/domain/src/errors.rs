use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Exchange with {server} failed: {reason}")]
    ExchangeFailed { server: String, reason: String },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Performing lookup for {ip}: {source}")]
    LookupFailed { ip: String, source: Box<DomainError> },

    #[error("Lookup for {0}: the answer section is empty")]
    EmptyAnswer(String),

    #[error("Lookup for {0}: the first answer is not a PTR record")]
    NotPtr(String),

    #[error("All {} local resolvers failed to answer", errors.len())]
    LocalResolversExhausted { errors: Vec<DomainError> },

    #[error("No upstream servers configured")]
    NoUpstreamServers,

    #[error("Client registry error: {0}")]
    RegistryError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
