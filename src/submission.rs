//! # Submission Engine
//!
//! Creates a reduced execution object on the resolved cluster. Creation is
//! idempotent: an object that already exists is the desired end state, so a
//! retried request succeeds without reconciling the stored content.

use crate::cluster::{ApiOutcome, TargetCluster};
use crate::context::OperationContext;
use crate::error::{ClusterApiError, ExecutorError, ExecutorResult};
use crate::models::ExecutionObject;
use tracing::{debug, info, warn};

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAck {
    pub cluster_id: String,
    pub already_existed: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionEngine;

impl SubmissionEngine {
    pub fn new() -> Self {
        Self
    }

    pub async fn submit(
        &self,
        ctx: &OperationContext,
        object: &ExecutionObject,
        namespace: &str,
        cluster: &TargetCluster,
    ) -> ExecutorResult<SubmissionAck> {
        let outcome = ctx
            .run("create execution object", cluster.client.create(namespace, object))
            .await?;

        match outcome {
            ApiOutcome::Success => {
                info!(
                    execution = %object.execution_id,
                    cluster = %cluster.id,
                    namespace,
                    "Created execution object"
                );
                Ok(SubmissionAck {
                    cluster_id: cluster.id.clone(),
                    already_existed: false,
                })
            }
            ApiOutcome::AlreadyExists => {
                info!(
                    execution = %object.execution_id,
                    cluster = %cluster.id,
                    namespace,
                    "Execution object already exists, treating submission as accepted"
                );
                Ok(SubmissionAck {
                    cluster_id: cluster.id.clone(),
                    already_existed: true,
                })
            }
            ApiOutcome::NotFound => {
                // Namespace missing on the cluster: a create failure like any other.
                warn!(
                    execution = %object.execution_id,
                    cluster = %cluster.id,
                    namespace,
                    "Cluster reported not found on create"
                );
                Err(ExecutorError::Submission {
                    execution: object.execution_id.clone(),
                    cluster: cluster.id.clone(),
                    source: ClusterApiError::with_status(
                        404,
                        format!("namespace {namespace} not found"),
                    ),
                })
            }
            ApiOutcome::Failed(source) => {
                debug!(
                    execution = %object.execution_id,
                    cluster = %cluster.id,
                    error = %source,
                    "Failed to create execution in cluster"
                );
                Err(ExecutorError::Submission {
                    execution: object.execution_id.clone(),
                    cluster: cluster.id.clone(),
                    source,
                })
            }
        }
    }
}
