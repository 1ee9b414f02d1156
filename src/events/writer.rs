use crate::models::WorkflowExecutionEvent;
use std::fmt::Debug;
use tokio::sync::broadcast;
use tracing::debug;

/// Sink for workflow execution lifecycle events.
///
/// Writes are fire-and-forget: delivery and durability belong to the
/// implementation, and the executor never observes a result.
pub trait ExecutionEventWriter: Send + Sync + Debug {
    fn write(&self, event: WorkflowExecutionEvent);
}

/// Fans events out to every current subscriber.
#[derive(Debug, Clone)]
pub struct BroadcastEventWriter {
    sender: broadcast::Sender<WorkflowExecutionEvent>,
}

impl BroadcastEventWriter {
    /// Create a writer buffering up to `capacity` events per lagging subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowExecutionEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl ExecutionEventWriter for BroadcastEventWriter {
    fn write(&self, event: WorkflowExecutionEvent) {
        let execution = event.execution_id.clone();
        let phase = event.phase;
        // No subscribers is not an error for a fire-and-forget sink.
        if self.sender.send(event).is_err() {
            debug!(%execution, %phase, "Dropped execution event with no subscribers");
        }
    }
}

impl Default for BroadcastEventWriter {
    fn default() -> Self {
        Self::new(1000)
    }
}
