pub mod execution_identity;
pub mod execution_object;
pub mod execution_request;
pub mod workflow_execution_event;

// Re-export core models for easy access
pub use execution_identity::ExecutionIdentity;
pub use execution_object::{ExecutionObject, LiteralMap, ObjectMeta};
pub use execution_request::{
    AbortRequest, ExecutionParameters, ExecutionRequest, ExecutionResponse, WorkflowClosure,
};
pub use workflow_execution_event::{ExecutionErrorInfo, WorkflowExecutionEvent, WorkflowExecutionPhase};
