use crate::queue::{QueueReceiver, QueueSender};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Per-job work run by a [`WorkerPool`].
#[async_trait]
pub trait JobHandler<J, R>: Send + Sync + 'static {
    /// Results for one job, forwarded to the result queue in order.
    type Results: IntoIterator<Item = R> + Send;

    async fn handle(&self, job: J) -> Self::Results;
}

/// Fixed number of workers draining a shared job queue.
///
/// Each worker processes one job to completion before taking the next, so
/// at most `size` jobs are in flight. The result queue closes once every
/// worker has exited.
pub struct WorkerPool<J, R> {
    size: usize,
    shutdown: CancellationToken,
    _marker: PhantomData<fn(J) -> R>,
}

impl<J, R> WorkerPool<J, R>
where
    J: Send + 'static,
    R: Send + 'static,
{
    pub fn new(size: usize) -> Self {
        Self {
            size: size.max(1),
            shutdown: CancellationToken::new(),
            _marker: PhantomData,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Spawns the workers and returns a handle resolving to the number of
    /// jobs processed once all of them have exited.
    pub fn start<H>(
        self,
        handler: Arc<H>,
        jobs: QueueReceiver<J>,
        results: QueueSender<R>,
    ) -> JoinHandle<usize>
    where
        H: JobHandler<J, R>,
        <H::Results as IntoIterator>::IntoIter: Send,
    {
        info!(workers = self.size, "Starting worker pool");

        let mut workers = JoinSet::new();
        for id in 0..self.size {
            workers.spawn(Self::worker(
                id,
                Arc::clone(&handler),
                jobs.clone(),
                results.clone(),
                self.shutdown.clone(),
            ));
        }
        // Workers hold the only remaining senders
        drop(results);

        tokio::spawn(async move {
            let mut processed = 0usize;
            while let Some(joined) = workers.join_next().await {
                match joined {
                    Ok(count) => processed += count,
                    Err(e) => warn!(error = %e, "Worker task failed"),
                }
            }
            info!(processed, "Worker pool finished");
            processed
        })
    }

    async fn worker<H>(
        id: usize,
        handler: Arc<H>,
        jobs: QueueReceiver<J>,
        results: QueueSender<R>,
        shutdown: CancellationToken,
    ) -> usize
    where
        H: JobHandler<J, R>,
        <H::Results as IntoIterator>::IntoIter: Send,
    {
        let mut processed = 0usize;

        loop {
            let job = tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    debug!(worker = id, "Worker: cancelled");
                    break;
                }
                job = jobs.recv() => job,
            };

            let Some(job) = job else {
                break;
            };

            for result in handler.handle(job).await {
                if results.send(result).await.is_err() {
                    warn!(worker = id, "Result queue closed, worker exiting");
                    return processed;
                }
            }
            processed += 1;
        }

        debug!(worker = id, processed, "Worker exiting");
        processed
    }
}
