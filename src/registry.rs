//! # Workflow Executor Registry
//!
//! Lets a deployment swap in its own [`WorkflowExecutor`] while keeping the
//! cluster executor as the fallback.

use crate::executor::WorkflowExecutor;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

#[derive(Default)]
pub struct WorkflowExecutorRegistry {
    default: RwLock<Option<Arc<dyn WorkflowExecutor>>>,
    registered: RwLock<Option<Arc<dyn WorkflowExecutor>>>,
}

impl WorkflowExecutorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_default(&self, executor: Arc<dyn WorkflowExecutor>) {
        info!(executor = %executor.id(), "Registering default workflow executor");
        *self.default.write() = Some(executor);
    }

    /// Register an executor that takes precedence over the default.
    pub fn register(&self, executor: Arc<dyn WorkflowExecutor>) {
        info!(executor = %executor.id(), "Registering workflow executor");
        *self.registered.write() = Some(executor);
    }

    pub fn get_executor(&self) -> Option<Arc<dyn WorkflowExecutor>> {
        self.registered
            .read()
            .clone()
            .or_else(|| self.default.read().clone())
    }
}

impl std::fmt::Debug for WorkflowExecutorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = |slot: &RwLock<Option<Arc<dyn WorkflowExecutor>>>| {
            slot.read().as_ref().map(|executor| executor.id().to_string())
        };
        f.debug_struct("WorkflowExecutorRegistry")
            .field("default", &id(&self.default))
            .field("registered", &id(&self.registered))
            .finish()
    }
}
