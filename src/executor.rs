//! # Cluster Workflow Executor
//!
//! Creates and deletes workflow execution objects on execution clusters.
//!
//! ## Submission
//!
//! build → prepare → validate → reduce → route by policy → create
//!
//! The response records the accepting cluster. Every later operation on the
//! execution routes by that id through [`AbortRequest::cluster`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cluster_executor::builder::PassThroughWorkflowBuilder;
//! use cluster_executor::cluster::{InClusterRouter, InMemoryExecutionClient};
//! use cluster_executor::config::ExecutorConfig;
//! use cluster_executor::context::OperationContext;
//! use cluster_executor::events::BroadcastEventWriter;
//! use cluster_executor::executor::{ClusterWorkflowExecutor, WorkflowExecutor};
//! use cluster_executor::models::{AbortRequest, ExecutionRequest};
//! use cluster_executor::storage::PrefixStorageClient;
//! use std::sync::Arc;
//!
//! # async fn example(request: ExecutionRequest) -> Result<(), Box<dyn std::error::Error>> {
//! let executor = ClusterWorkflowExecutor::new(
//!     Arc::new(ExecutorConfig::from_env()?),
//!     Arc::new(InClusterRouter::new(Arc::new(InMemoryExecutionClient::new()))),
//!     Arc::new(PassThroughWorkflowBuilder),
//!     Arc::new(PrefixStorageClient::new("s3://metadata")),
//!     Arc::new(BroadcastEventWriter::default()),
//! );
//!
//! let ctx = OperationContext::background();
//! let response = executor.execute(&ctx, request.clone()).await?;
//! executor
//!     .abort(&ctx, AbortRequest {
//!         execution_id: request.execution_id,
//!         namespace: request.namespace,
//!         cluster: response.cluster,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::builder::WorkflowBuilder;
use crate::cluster::{ClusterRouter, ExecutionTargetSpec};
use crate::config::ExecutorConfig;
use crate::constants::DEFAULT_EXECUTOR_IDENTIFIER;
use crate::context::OperationContext;
use crate::error::{ExecutorError, ExecutorResult};
use crate::events::ExecutionEventWriter;
use crate::logging::log_execution_operation;
use crate::models::{AbortRequest, ExecutionRequest, ExecutionResponse};
use crate::preparation::prepare_execution_object;
use crate::reducer::reduce;
use crate::storage::{DataReference, StorageClient};
use crate::submission::SubmissionEngine;
use crate::termination::TerminationEngine;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, Level};

/// Submits and terminates workflow executions.
#[async_trait]
pub trait WorkflowExecutor: Send + Sync {
    /// Static identity of this executor, for log and metric correlation.
    fn id(&self) -> &str;

    async fn execute(
        &self,
        ctx: &OperationContext,
        request: ExecutionRequest,
    ) -> ExecutorResult<ExecutionResponse>;

    async fn abort(&self, ctx: &OperationContext, request: AbortRequest) -> ExecutorResult<()>;
}

/// Executor backed by Kubernetes-style execution clusters.
///
/// Holds no mutable state: all collaborators are shared read-only handles
/// injected at construction, so one instance serves any number of concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct ClusterWorkflowExecutor {
    config: Arc<ExecutorConfig>,
    router: Arc<dyn ClusterRouter>,
    builder: Arc<dyn WorkflowBuilder>,
    storage: Arc<dyn StorageClient>,
    submission: SubmissionEngine,
    termination: TerminationEngine,
}

impl ClusterWorkflowExecutor {
    pub fn new(
        config: Arc<ExecutorConfig>,
        router: Arc<dyn ClusterRouter>,
        builder: Arc<dyn WorkflowBuilder>,
        storage: Arc<dyn StorageClient>,
        event_writer: Arc<dyn ExecutionEventWriter>,
    ) -> Self {
        let termination = TerminationEngine::new(router.clone(), event_writer);
        Self {
            config,
            router,
            builder,
            storage,
            submission: SubmissionEngine::new(),
            termination,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Storage handle shared with consumers that rehydrate offloaded data.
    pub fn storage_client(&self) -> &Arc<dyn StorageClient> {
        &self.storage
    }

    fn validate_offload_references(&self, request: &ExecutionRequest) -> ExecutorResult<()> {
        let unusable =
            |reference: &Option<DataReference>| reference.as_ref().map_or(true, DataReference::is_empty);

        let missing = if self.config.use_offloaded_workflow_closure
            && unusable(&request.workflow_closure_reference)
        {
            Some("closure offloading is enabled but no workflow closure reference was provided")
        } else if self.config.use_offloaded_inputs && unusable(&request.offloaded_inputs_reference)
        {
            Some("inputs offloading is enabled but no offloaded inputs reference was provided")
        } else {
            None
        };

        match missing {
            Some(reason) => Err(ExecutorError::InvalidRequest {
                execution: request.execution_id.clone(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn target_spec(request: &ExecutionRequest) -> ExecutionTargetSpec {
    ExecutionTargetSpec {
        project: request.execution_id.project.clone(),
        domain: request.execution_id.domain.clone(),
        workflow: request.reference_workflow_name.clone(),
        launch_plan: request.reference_workflow_name.clone(),
        execution_id: request.execution_id.name.clone(),
        execution_cluster_label: request.parameters.execution_cluster_label.clone(),
    }
}

#[async_trait]
impl WorkflowExecutor for ClusterWorkflowExecutor {
    fn id(&self) -> &str {
        DEFAULT_EXECUTOR_IDENTIFIER
    }

    #[instrument(skip_all, fields(execution = %request.execution_id, namespace = %request.namespace))]
    async fn execute(
        &self,
        ctx: &OperationContext,
        request: ExecutionRequest,
    ) -> ExecutorResult<ExecutionResponse> {
        let mut prepared = self
            .builder
            .build(
                &request.workflow_closure,
                &request.parameters.inputs,
                &request.execution_id,
                &request.namespace,
            )
            .map_err(|err| {
                info!(
                    template = %request.workflow_closure.primary_template_id,
                    error = %err,
                    "Failed to build the workflow"
                );
                err
            })?;

        prepare_execution_object(&request, &mut prepared).map_err(|source| {
            ExecutorError::Preparation {
                execution: request.execution_id.clone(),
                source,
            }
        })?;
        self.validate_offload_references(&request)?;

        let inline_size = tracing::enabled!(Level::DEBUG).then(|| prepared.encoded_size());
        let object = reduce(prepared, &request, &self.config);
        if let Some(inline_bytes) = inline_size {
            debug!(
                inline_bytes,
                submitted_bytes = object.encoded_size(),
                closure_offloaded = object.workflow_closure_reference.is_some(),
                inputs_offloaded = object.offloaded_inputs.is_some(),
                "Reduced execution object"
            );
        }

        let spec = target_spec(&request);
        let cluster = ctx
            .run("resolve execution cluster", self.router.resolve_for_submit(&spec))
            .await?
            .map_err(|source| ExecutorError::Routing {
                execution: request.execution_id.clone(),
                source,
            })?;

        let ack = self
            .submission
            .submit(ctx, &object, &request.namespace, &cluster)
            .await?;

        log_execution_operation(
            "execute",
            &request.execution_id,
            Some(&ack.cluster_id),
            if ack.already_existed { "already_exists" } else { "created" },
        );
        Ok(ExecutionResponse {
            cluster: ack.cluster_id,
        })
    }

    #[instrument(skip_all, fields(execution = %request.execution_id, cluster = %request.cluster))]
    async fn abort(&self, ctx: &OperationContext, request: AbortRequest) -> ExecutorResult<()> {
        self.termination
            .abort(ctx, &request.execution_id, &request.namespace, &request.cluster)
            .await?;

        log_execution_operation("abort", &request.execution_id, Some(&request.cluster), "aborted");
        Ok(())
    }
}
