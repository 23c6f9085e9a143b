use crate::collector::{ResultCollector, ScanSummary};
use crate::dispatcher::JobDispatcher;
use crate::queue::BoundedQueue;
use crate::worker_pool::{JobHandler, WorkerPool};
use async_trait::async_trait;
use cnamescan_application::ports::{DiagnosticSink, ServerSelector};
use cnamescan_application::use_cases::scan::DomainFindings;
use cnamescan_application::use_cases::ProcessDomainUseCase;
use cnamescan_domain::{DomainError, Finding, ScanConfig, ScanJob};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[async_trait]
impl JobHandler<ScanJob, Finding> for ProcessDomainUseCase {
    type Results = DomainFindings;

    async fn handle(&self, job: ScanJob) -> DomainFindings {
        self.execute(&job).await
    }
}

/// Wires dispatcher, worker pool and collector together for one scan.
///
/// # Example
///
/// ```rust,ignore
/// let summary = ScanRunner::new(config, process, selector, diagnostics)
///     .with_cancellation(token)
///     .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
///     .await?;
/// ```
pub struct ScanRunner {
    config: Arc<ScanConfig>,
    process: Arc<ProcessDomainUseCase>,
    selector: Arc<dyn ServerSelector>,
    diagnostics: Arc<dyn DiagnosticSink>,
    shutdown: CancellationToken,
}

impl ScanRunner {
    pub fn new(
        config: Arc<ScanConfig>,
        process: Arc<ProcessDomainUseCase>,
        selector: Arc<dyn ServerSelector>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            config,
            process,
            selector,
            diagnostics,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Scans every domain read from `input`, writing findings to `output`.
    ///
    /// Returns once the input is exhausted (or the run is cancelled) and all
    /// queued work has drained. Fails only if `output` cannot be written.
    pub async fn run<R, W>(self, input: R, output: W) -> Result<ScanSummary, DomainError>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin,
    {
        info!(
            concurrency = self.config.concurrency,
            retries = self.config.retries,
            timeout_ms = self.config.timeout.as_millis() as u64,
            resolvers = self.config.resolvers.len(),
            "Starting scan"
        );

        let (job_tx, job_rx) = BoundedQueue::new::<ScanJob>(self.config.job_queue_capacity());
        let (result_tx, result_rx) =
            BoundedQueue::new::<Finding>(self.config.result_queue_capacity());

        let dispatcher = JobDispatcher::new(
            self.config.resolvers.clone(),
            Arc::clone(&self.selector),
            Arc::clone(&self.diagnostics),
        )
        .with_cancellation(self.shutdown.clone());
        let dispatch = tokio::spawn(async move { dispatcher.run(input, job_tx).await });

        let pool = WorkerPool::new(self.config.concurrency)
            .with_cancellation(self.shutdown.clone())
            .start(Arc::clone(&self.process), job_rx, result_tx);

        let collected = ResultCollector::new(output)
            .with_cancellation(self.shutdown.clone())
            .run(result_rx)
            .await;

        let dispatched = dispatch
            .await
            .map_err(|e| DomainError::TaskFailed(format!("dispatcher: {}", e)))?;
        let processed = pool
            .await
            .map_err(|e| DomainError::TaskFailed(format!("worker pool: {}", e)))?;

        let mut summary = collected?;
        summary.dispatched = dispatched;
        summary.processed = processed;
        summary.cancelled = self.shutdown.is_cancelled();

        if summary.cancelled {
            warn!(dispatched, processed, "Scan cancelled before input was exhausted");
        }

        info!(
            dispatched = summary.dispatched,
            processed = summary.processed,
            dangling = summary.dangling,
            takeover = summary.takeover,
            ok = summary.ok,
            "Scan finished"
        );

        Ok(summary)
    }
}
