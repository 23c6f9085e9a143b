use cnamescan_application::ports::ServerSelector;
use cnamescan_domain::ResolverPool;
use std::sync::Arc;

/// Uniformly random resolver choice backed by `fastrand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastrandSelector;

impl ServerSelector for FastrandSelector {
    fn select(&self, pool: &ResolverPool) -> Arc<str> {
        let servers = pool.servers();
        Arc::clone(&servers[fastrand::usize(..servers.len())])
    }
}
