use crate::ports::CnameResolver;
use cnamescan_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Delay unit for linear backoff: the wait before attempt `n + 1` is
/// `BACKOFF_STEP * n`.
pub const BACKOFF_STEP: Duration = Duration::from_millis(100);

/// Use case: CNAME lookup with bounded retries and linear backoff.
pub struct LookupCnameUseCase {
    resolver: Arc<dyn CnameResolver>,
    retries: u32,
    backoff_step: Duration,
}

impl LookupCnameUseCase {
    pub fn new(resolver: Arc<dyn CnameResolver>, retries: u32) -> Self {
        Self {
            resolver,
            retries,
            backoff_step: BACKOFF_STEP,
        }
    }

    pub fn with_backoff_step(mut self, step: Duration) -> Self {
        self.backoff_step = step;
        self
    }

    /// Makes up to `retries + 1` attempts. Returns the first successful
    /// answer, or the error from the last attempt.
    pub async fn execute(
        &self,
        domain: &str,
        server: &str,
    ) -> Result<Option<Arc<str>>, DomainError> {
        let max_attempts = self.retries.saturating_add(1);
        let mut attempt: u32 = 1;

        loop {
            match self.resolver.lookup_cname(domain, server).await {
                Ok(cname) => return Ok(cname),
                Err(e) if attempt >= max_attempts => {
                    debug!(%domain, %server, attempts = attempt, error = %e, "CNAME lookup exhausted retries");
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.backoff_step * attempt;
                    debug!(
                        %domain,
                        %server,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "CNAME lookup failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
