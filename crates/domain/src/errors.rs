use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid resolver address: {0}")]
    InvalidResolverAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to encode DNS query: {0}")]
    QueryEncoding(String),

    #[error("Invalid takeover signatures: {0}")]
    InvalidSignatures(String),

    #[error("DNS query to {server} timed out")]
    TransportTimeout { server: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("{0}")]
    InputRead(String),

    #[error("Resolver pool is empty")]
    EmptyResolverPool,

    #[error("Background task failed: {0}")]
    TaskFailed(String),
}
