use async_trait::async_trait;
use cnamescan_application::ports::HostResolver;
use std::time::Duration;
use tracing::debug;

/// Resolves hostnames through the operating system resolver
/// (`getaddrinfo`), bounded by a timeout.
pub struct SystemHostResolver {
    timeout: Duration,
}

impl SystemHostResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolves(&self, host: &str) -> bool {
        let host = host.strip_suffix('.').unwrap_or(host);
        if host.is_empty() {
            return false;
        }

        // Port is required by lookup_host but irrelevant here
        let target = format!("{}:0", host);

        match tokio::time::timeout(self.timeout, tokio::net::lookup_host(target)).await {
            Ok(Ok(mut addrs)) => {
                let resolves = addrs.next().is_some();
                debug!(%host, resolves, "Host lookup finished");
                resolves
            }
            Ok(Err(e)) => {
                debug!(%host, error = %e, "Host lookup failed");
                false
            }
            Err(_) => {
                debug!(%host, timeout_ms = self.timeout.as_millis() as u64, "Host lookup timed out");
                false
            }
        }
    }
}
