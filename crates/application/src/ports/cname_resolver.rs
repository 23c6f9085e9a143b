use async_trait::async_trait;
use cnamescan_domain::DomainError;
use std::sync::Arc;

/// A single CNAME query against one DNS server.
#[async_trait]
pub trait CnameResolver: Send + Sync {
    /// Returns the CNAME target without its trailing root dot, or `None`
    /// when the name has no CNAME (direct A record, authoritative negative,
    /// or an empty answer).
    ///
    /// Errors are transport or protocol failures of this one attempt.
    async fn lookup_cname(
        &self,
        domain: &str,
        server: &str,
    ) -> Result<Option<Arc<str>>, DomainError>;
}
