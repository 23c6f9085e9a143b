use crate::resolver_pool::DEFAULT_RESOLVERS;
use crate::{ResolverPool, ServiceSignature};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scan pipeline settings as they appear in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanSettings {
    /// Number of concurrent workers (default: 20)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-DNS-operation timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Extra attempts after the first failed query (default: 2)
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Emit OK findings and per-domain diagnostics (default: false)
    #[serde(default)]
    pub verbose: bool,

    /// Resolver addresses jobs are spread across, as `ip` or `ip:port`
    #[serde(default = "default_resolvers")]
    pub resolvers: Vec<String>,

    /// Additional takeover signatures, matched after the built-in table
    #[serde(default)]
    pub extra_signatures: Vec<ServiceSignature>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout_ms: default_timeout_ms(),
            retries: default_retries(),
            verbose: false,
            resolvers: default_resolvers(),
            extra_signatures: vec![],
        }
    }
}

fn default_concurrency() -> usize {
    20
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_retries() -> u32 {
    2
}

fn default_resolvers() -> Vec<String> {
    DEFAULT_RESOLVERS.iter().map(|s| s.to_string()).collect()
}

/// Immutable, validated configuration shared by every pipeline stage.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub concurrency: usize,
    pub timeout: Duration,
    pub retries: u32,
    pub verbose: bool,
    pub resolvers: ResolverPool,
}

impl ScanConfig {
    /// Job queue holds two jobs per worker so workers never starve while
    /// the dispatcher is reading.
    pub fn job_queue_capacity(&self) -> usize {
        self.concurrency.saturating_mul(2)
    }

    pub fn result_queue_capacity(&self) -> usize {
        self.concurrency
    }

    /// Total query attempts per domain.
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout: Duration::from_millis(default_timeout_ms()),
            retries: default_retries(),
            verbose: false,
            resolvers: ResolverPool::default(),
        }
    }
}
