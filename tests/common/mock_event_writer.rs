use cluster_executor::events::ExecutionEventWriter;
use cluster_executor::models::WorkflowExecutionEvent;
use std::sync::Mutex;

/// Event writer that keeps every event for assertions.
#[derive(Debug, Default)]
pub struct RecordingEventWriter {
    events: Mutex<Vec<WorkflowExecutionEvent>>,
}

impl RecordingEventWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<WorkflowExecutionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl ExecutionEventWriter for RecordingEventWriter {
    fn write(&self, event: WorkflowExecutionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
