// Bounded, ordered, single-consumer event queue. Producers block when the
// queue is full (backpressure); nothing is ever dropped.

use crate::event::Event;
use thiserror::Error;
use tokio::sync::mpsc;

/// Default number of in-flight events before producers stall.
pub const DEFAULT_CAPACITY: usize = 64;

/// Publishing fails only when the dispatcher has gone away.
#[derive(Debug, Error)]
#[error("event bus closed")]
pub struct BusClosed;

/// The dispatcher's end of the bus. Exactly one exists per bus.
pub type EventReceiver = mpsc::Receiver<Event>;

/// Create a bus with the given capacity. The receiver goes to the dispatcher;
/// the publisher may be cloned freely across producers.
pub fn channel(capacity: usize) -> (EventPublisher, EventReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventPublisher { tx }, rx)
}

#[derive(Clone)]
pub struct EventPublisher {
    tx: mpsc::Sender<Event>,
}

impl EventPublisher {
    /// Enqueue one event, waiting for a free slot when the bus is full.
    /// Per-publisher FIFO order is preserved to the single consumer.
    pub async fn publish(&self, event: Event) -> Result<(), BusClosed> {
        self.tx.send(event).await.map_err(|_| BusClosed)
    }
}
