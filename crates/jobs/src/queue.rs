use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Bounded FIFO channel with blocking send and shared receive.
///
/// `send` waits while the queue is full. The queue is closed once every
/// [`QueueSender`] is dropped; receivers then drain what is buffered and
/// get `None`. [`QueueReceiver`] is cloneable so several consumers can pull
/// from the same queue, each item going to exactly one of them.
pub struct BoundedQueue;

impl BoundedQueue {
    #[allow(clippy::new_ret_no_self)]
    pub fn new<T>(capacity: usize) -> (QueueSender<T>, QueueReceiver<T>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            QueueSender { tx },
            QueueReceiver {
                rx: Arc::new(Mutex::new(rx)),
            },
        )
    }
}

pub struct QueueSender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> QueueSender<T> {
    /// Waits for free capacity, then enqueues.
    ///
    /// Returns the item back if every receiver has been dropped.
    pub async fn send(&self, item: T) -> Result<(), T> {
        self.tx.send(item).await.map_err(|e| e.0)
    }

    pub fn capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}

impl<T> Clone for QueueSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

pub struct QueueReceiver<T> {
    rx: Arc<Mutex<mpsc::Receiver<T>>>,
}

impl<T> QueueReceiver<T> {
    /// Next item, or `None` once the queue is closed and drained.
    ///
    /// Cancel-safe: dropping the future before it completes loses no item.
    pub async fn recv(&self) -> Option<T> {
        self.rx.lock().await.recv().await
    }
}

impl<T> Clone for QueueReceiver<T> {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}
