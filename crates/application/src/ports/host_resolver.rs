use async_trait::async_trait;

/// Standard hostname resolution, used to check whether a CNAME target is
/// still live.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// `true` when at least one address comes back. Every failure mode
    /// (NXDOMAIN, timeout, server error, empty answer) is `false`.
    async fn resolves(&self, host: &str) -> bool;
}
