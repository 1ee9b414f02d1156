//! # Error Types
//!
//! Error taxonomy for the executor. Collaborator failures keep their own types
//! and are attached to [`ExecutorError`] as the underlying source, so callers
//! can log the execution identity together with the root cause.

use crate::models::ExecutionIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type ExecutorResult<T> = std::result::Result<T, ExecutorError>;

/// Status code attached to every executor failure, mirroring the codes the
/// control plane reports to its own callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    Internal,
    Cancelled,
    DeadlineExceeded,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::Cancelled => "CANCELLED",
            ErrorCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
        };
        f.write_str(code)
    }
}

/// Failure reported by a [`crate::builder::WorkflowBuilder`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("workflow closure has no primary workflow template")]
    MissingPrimaryWorkflow,
    #[error("invalid workflow inputs: {0}")]
    InvalidInputs(String),
    #[error("failed to compile workflow {template_id}: {reason}")]
    Compilation { template_id: String, reason: String },
}

/// Execution parameters that could not be applied to a built object.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreparationError {
    #[error("invalid label key '{key}': {reason}")]
    InvalidLabel { key: String, reason: String },
}

/// Failure to resolve a target cluster.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("no execution cluster available for {project}/{domain} (label: {label:?})")]
    NoTargetAvailable {
        project: String,
        domain: String,
        label: Option<String>,
    },
    #[error("unknown execution cluster '{cluster_id}'")]
    UnknownCluster { cluster_id: String },
    #[error("cluster router unavailable: {0}")]
    Unavailable(String),
}

/// Non-tolerated failure returned by a cluster's execution-object API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cluster api error (status {status:?}): {message}")]
pub struct ClusterApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ClusterApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Errors returned by [`crate::executor::WorkflowExecutor`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutorError {
    /// Builder failures surface as-is.
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to prepare workflow for execution {execution}: {source}")]
    Preparation {
        execution: ExecutionIdentity,
        #[source]
        source: PreparationError,
    },

    #[error("invalid execution request {execution}: {reason}")]
    InvalidRequest {
        execution: ExecutionIdentity,
        reason: String,
    },

    #[error("failed to resolve execution cluster for {execution}: {source}")]
    Routing {
        execution: ExecutionIdentity,
        #[source]
        source: RoutingError,
    },

    #[error("failed to create workflow for execution {execution} in cluster {cluster}: {source}")]
    Submission {
        execution: ExecutionIdentity,
        cluster: String,
        #[source]
        source: ClusterApiError,
    },

    #[error("failed to terminate execution {execution} in cluster {cluster}: {source}")]
    Termination {
        execution: ExecutionIdentity,
        cluster: String,
        #[source]
        source: ClusterApiError,
    },

    #[error("{operation} cancelled")]
    Cancelled { operation: String },

    #[error("{operation} exceeded its deadline")]
    DeadlineExceeded { operation: String },
}

impl ExecutorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExecutorError::Build(_)
            | ExecutorError::Preparation { .. }
            | ExecutorError::InvalidRequest { .. } => ErrorCode::InvalidArgument,
            ExecutorError::Routing { .. }
            | ExecutorError::Submission { .. }
            | ExecutorError::Termination { .. } => ErrorCode::Internal,
            ExecutorError::Cancelled { .. } => ErrorCode::Cancelled,
            ExecutorError::DeadlineExceeded { .. } => ErrorCode::DeadlineExceeded,
        }
    }

    /// Execution the failure belongs to, when the variant records one.
    pub fn execution(&self) -> Option<&ExecutionIdentity> {
        match self {
            ExecutorError::Preparation { execution, .. }
            | ExecutorError::InvalidRequest { execution, .. }
            | ExecutorError::Routing { execution, .. }
            | ExecutorError::Submission { execution, .. }
            | ExecutorError::Termination { execution, .. } => Some(execution),
            ExecutorError::Build(_)
            | ExecutorError::Cancelled { .. }
            | ExecutorError::DeadlineExceeded { .. } => None,
        }
    }
}
