use crate::queue::QueueReceiver;
use cnamescan_domain::{DomainError, Finding, FindingKind};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Totals for one scan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub dispatched: usize,
    pub processed: usize,
    pub ok: usize,
    pub dangling: usize,
    pub takeover: usize,
    pub cancelled: bool,
}

impl ScanSummary {
    pub fn record(&mut self, kind: FindingKind) {
        match kind {
            FindingKind::Ok => self.ok += 1,
            FindingKind::Dangling => self.dangling += 1,
            FindingKind::Takeover => self.takeover += 1,
        }
    }

    pub fn findings(&self) -> usize {
        self.ok + self.dangling + self.takeover
    }
}

/// Single consumer of the result queue. Writes one line per finding in
/// arrival order.
pub struct ResultCollector<W> {
    writer: W,
    shutdown: CancellationToken,
}

impl<W> ResultCollector<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            shutdown: CancellationToken::new(),
        }
    }

    /// Token cancelled if the output becomes unwritable, so producers stop
    /// early instead of scanning into the void.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Drains `results` until closed.
    ///
    /// After a write failure the remaining findings are still drained (and
    /// dropped) so workers never block on a full queue; the error is then
    /// returned.
    pub async fn run(mut self, results: QueueReceiver<Finding>) -> Result<ScanSummary, DomainError> {
        let mut summary = ScanSummary::default();
        let mut write_error: Option<std::io::Error> = None;

        while let Some(finding) = results.recv().await {
            summary.record(finding.kind());

            if write_error.is_some() {
                continue;
            }

            if let Err(e) = self.write_line(&finding).await {
                error!(error = %e, "Failed to write finding, cancelling scan");
                self.shutdown.cancel();
                write_error = Some(e);
            }
        }

        if write_error.is_none() {
            if let Err(e) = self.writer.flush().await {
                write_error = Some(e);
            }
        }

        debug!(
            ok = summary.ok,
            dangling = summary.dangling,
            takeover = summary.takeover,
            "Result queue drained"
        );

        match write_error {
            Some(e) => Err(DomainError::IoError(format!("Failed to write output: {}", e))),
            None => Ok(summary),
        }
    }

    async fn write_line(&mut self, finding: &Finding) -> std::io::Result<()> {
        let line = format!("{}\n", finding);
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await
    }
}
