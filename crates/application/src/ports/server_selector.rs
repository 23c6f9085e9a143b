use cnamescan_domain::ResolverPool;
use std::sync::Arc;

/// Picks which resolver a job is sent to. Used for load distribution only.
pub trait ServerSelector: Send + Sync {
    fn select(&self, pool: &ResolverPool) -> Arc<str>;
}
