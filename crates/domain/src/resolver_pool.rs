use crate::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Standard DNS port used when a resolver entry carries no port.
pub const DNS_PORT: u16 = 53;

/// Public recursive resolvers used when no pool is configured.
pub const DEFAULT_RESOLVERS: &[&str] = &[
    "1.1.1.1",         // Cloudflare
    "1.0.0.1",         // Cloudflare
    "8.8.8.8",         // Google
    "8.8.4.4",         // Google
    "9.9.9.9",         // Quad9
    "149.112.112.112", // Quad9
    "208.67.222.222",  // OpenDNS
    "208.67.220.220",  // OpenDNS
];

/// Ordered, non-empty set of resolver addresses that jobs are spread across.
#[derive(Debug, Clone)]
pub struct ResolverPool {
    servers: Arc<[Arc<str>]>,
}

impl ResolverPool {
    /// Builds a pool, rejecting empty pools and unparsable entries.
    /// Duplicate entries are dropped, keeping first occurrence order.
    pub fn new<I, S>(servers: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<Arc<str>> = Vec::new();
        for server in servers {
            let server = server.as_ref().trim();
            parse_resolver_addr(server)?;
            if !unique.iter().any(|s| &**s == server) {
                unique.push(Arc::from(server));
            }
        }

        if unique.is_empty() {
            return Err(DomainError::EmptyResolverPool);
        }

        Ok(Self {
            servers: Arc::from(unique),
        })
    }

    pub fn servers(&self) -> &[Arc<str>] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl Default for ResolverPool {
    fn default() -> Self {
        Self {
            servers: DEFAULT_RESOLVERS.iter().map(|s| Arc::from(*s)).collect(),
        }
    }
}

/// Parses a resolver entry into the UDP endpoint to query.
///
/// Accepts a bare IP (`8.8.8.8`, `2001:4860:4860::8888`), which is queried on
/// port 53, or a full socket address (`127.0.0.1:5300`, `[::1]:5300`).
pub fn parse_resolver_addr(server: &str) -> Result<SocketAddr, DomainError> {
    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DNS_PORT));
    }
    server
        .parse::<SocketAddr>()
        .map_err(|_| DomainError::InvalidResolverAddress(server.to_string()))
}
