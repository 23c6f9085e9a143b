pub mod collector;
pub mod dispatcher;
pub mod queue;
pub mod runner;
pub mod worker_pool;

pub use collector::{ResultCollector, ScanSummary};
pub use dispatcher::JobDispatcher;
pub use queue::{BoundedQueue, QueueReceiver, QueueSender};
pub use runner::ScanRunner;
pub use worker_pool::{JobHandler, WorkerPool};
