use crate::queue::QueueSender;
use cnamescan_application::ports::{DiagnosticSink, ServerSelector};
use cnamescan_domain::{Diagnostic, DomainError, ResolverPool, ScanJob};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Turns input lines into jobs, one per non-blank line, each bound to a
/// resolver picked from the pool.
pub struct JobDispatcher {
    pool: ResolverPool,
    selector: Arc<dyn ServerSelector>,
    diagnostics: Arc<dyn DiagnosticSink>,
    shutdown: CancellationToken,
}

impl JobDispatcher {
    pub fn new(
        pool: ResolverPool,
        selector: Arc<dyn ServerSelector>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            pool,
            selector,
            diagnostics,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Reads `input` to the end and returns the number of jobs enqueued.
    ///
    /// The job queue closes when this returns, since `jobs` is consumed.
    /// A read error stops reading and is always reported; jobs already
    /// enqueued are left to drain.
    pub async fn run<R>(&self, input: R, jobs: QueueSender<ScanJob>) -> usize
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut dispatched = 0usize;

        loop {
            let next = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!(dispatched, "JobDispatcher: cancelled, discarding remaining input");
                    break;
                }
                next = lines.next_line() => next,
            };

            let line = match next {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    let error = DomainError::InputRead(e.to_string());
                    warn!(%error, dispatched, "Input read failed");
                    self.diagnostics.report(&Diagnostic::input_read(&error));
                    break;
                }
            };

            let Some(domain) = ScanJob::normalize_domain(&line) else {
                continue;
            };

            let server = self.selector.select(&self.pool);
            debug!(%domain, %server, "Dispatching job");

            let sent = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!(dispatched, "JobDispatcher: cancelled while queue was full");
                    break;
                }
                sent = jobs.send(ScanJob::new(domain, server)) => sent,
            };

            if sent.is_err() {
                warn!(dispatched, "Job queue has no consumers, stopping dispatch");
                break;
            }
            dispatched += 1;
        }

        debug!(dispatched, "Input exhausted, closing job queue");
        dispatched
    }
}
