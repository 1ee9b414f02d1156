use super::ExecutionIdentity;
use crate::constants::abort;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowExecutionPhase {
    Undefined,
    Queued,
    Running,
    Succeeding,
    Succeeded,
    Failing,
    Failed,
    Aborting,
    Aborted,
    TimedOut,
}

impl WorkflowExecutionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::Failed | Self::Aborted | Self::TimedOut
        )
    }
}

impl fmt::Display for WorkflowExecutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Self::Undefined => "UNDEFINED",
            Self::Queued => "QUEUED",
            Self::Running => "RUNNING",
            Self::Succeeding => "SUCCEEDING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failing => "FAILING",
            Self::Failed => "FAILED",
            Self::Aborting => "ABORTING",
            Self::Aborted => "ABORTED",
            Self::TimedOut => "TIMED_OUT",
        };
        f.write_str(phase)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionErrorInfo {
    pub code: String,
    pub message: String,
}

/// Lifecycle event reported to the event sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecutionEvent {
    pub execution_id: ExecutionIdentity,
    pub phase: WorkflowExecutionPhase,
    pub producer_id: String,
    pub occurred_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ExecutionErrorInfo>,
}

impl WorkflowExecutionEvent {
    /// Terminal event for an operator-initiated abort, stamped with the
    /// current time.
    pub fn aborted(execution_id: ExecutionIdentity, producer_id: impl Into<String>) -> Self {
        Self {
            execution_id,
            phase: WorkflowExecutionPhase::Aborted,
            producer_id: producer_id.into(),
            occurred_at: Utc::now(),
            error: Some(ExecutionErrorInfo {
                code: abort::ERROR_CODE.to_string(),
                message: abort::ERROR_MESSAGE.to_string(),
            }),
        }
    }
}
