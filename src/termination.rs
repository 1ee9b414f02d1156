//! # Termination Engine
//!
//! Aborts a submitted execution on the cluster that holds it.
//!
//! ## Protocol
//!
//! 1. Resolve the cluster **by id**. An unknown cluster fails the abort
//!    before anything is deleted or reported.
//! 2. Delete the execution object with background propagation, so the call
//!    returns once the cluster accepts the delete while per-task children are
//!    cleaned up asynchronously.
//! 3. "Not found" counts as deleted: a prior abort, garbage collection or the
//!    execution finishing on its own got there first.
//! 4. Any other delete failure is returned and **no event is written**. The
//!    execution is still present, so observers must not see it as aborted and
//!    the caller is expected to retry.
//! 5. Once deletion is confirmed, exactly one `ABORTED` event is written.

use crate::cluster::{ApiOutcome, ClusterRouter, DeleteOptions};
use crate::constants::EVENT_PRODUCER_ID;
use crate::context::OperationContext;
use crate::error::{ClusterApiError, ExecutorError, ExecutorResult};
use crate::events::ExecutionEventWriter;
use crate::models::{ExecutionIdentity, WorkflowExecutionEvent};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct TerminationEngine {
    router: Arc<dyn ClusterRouter>,
    event_writer: Arc<dyn ExecutionEventWriter>,
    producer_id: String,
}

impl TerminationEngine {
    pub fn new(router: Arc<dyn ClusterRouter>, event_writer: Arc<dyn ExecutionEventWriter>) -> Self {
        Self {
            router,
            event_writer,
            producer_id: EVENT_PRODUCER_ID.to_string(),
        }
    }

    pub fn with_producer_id(mut self, producer_id: impl Into<String>) -> Self {
        self.producer_id = producer_id.into();
        self
    }

    pub fn producer_id(&self) -> &str {
        &self.producer_id
    }

    pub async fn abort(
        &self,
        ctx: &OperationContext,
        execution: &ExecutionIdentity,
        namespace: &str,
        cluster_id: &str,
    ) -> ExecutorResult<()> {
        let target = ctx
            .run("resolve execution cluster", self.router.resolve_by_id(cluster_id))
            .await?
            .map_err(|source| ExecutorError::Routing {
                execution: execution.clone(),
                source,
            })?;

        let outcome = ctx
            .run(
                "delete execution object",
                target
                    .client
                    .delete(namespace, &execution.name, &DeleteOptions::background()),
            )
            .await?;

        match outcome {
            ApiOutcome::Success => {
                info!(%execution, cluster = %target.id, namespace, "Deleted execution object");
            }
            ApiOutcome::NotFound => {
                info!(
                    %execution,
                    cluster = %target.id,
                    namespace,
                    "Execution object already removed"
                );
            }
            ApiOutcome::AlreadyExists => {
                return Err(self.termination_error(
                    execution,
                    &target.id,
                    ClusterApiError::with_status(409, "unexpected conflict on delete"),
                ));
            }
            ApiOutcome::Failed(source) => {
                return Err(self.termination_error(execution, &target.id, source));
            }
        }

        self.event_writer.write(WorkflowExecutionEvent::aborted(
            execution.clone(),
            self.producer_id.clone(),
        ));
        Ok(())
    }

    fn termination_error(
        &self,
        execution: &ExecutionIdentity,
        cluster: &str,
        source: ClusterApiError,
    ) -> ExecutorError {
        error!(
            %execution,
            cluster,
            error = %source,
            "Failed to terminate execution, withholding abort event"
        );
        ExecutorError::Termination {
            execution: execution.clone(),
            cluster: cluster.to_string(),
            source,
        }
    }
}
