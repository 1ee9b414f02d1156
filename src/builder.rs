//! # Workflow Builder Contract
//!
//! Compiling a workflow closure into a submittable [`ExecutionObject`] belongs
//! to the control plane's compiler; the executor only consumes the result.

use crate::error::BuildError;
use crate::models::{ExecutionIdentity, ExecutionObject, LiteralMap, WorkflowClosure};
use std::fmt::Debug;

pub trait WorkflowBuilder: Send + Sync + Debug {
    fn build(
        &self,
        closure: &WorkflowClosure,
        inputs: &LiteralMap,
        execution_id: &ExecutionIdentity,
        namespace: &str,
    ) -> Result<ExecutionObject, BuildError>;
}

/// Copies an already compiled closure into the object unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughWorkflowBuilder;

impl WorkflowBuilder for PassThroughWorkflowBuilder {
    fn build(
        &self,
        closure: &WorkflowClosure,
        inputs: &LiteralMap,
        execution_id: &ExecutionIdentity,
        namespace: &str,
    ) -> Result<ExecutionObject, BuildError> {
        let primary = closure
            .primary
            .clone()
            .ok_or(BuildError::MissingPrimaryWorkflow)?;

        let mut object = ExecutionObject::new(execution_id.clone(), namespace);
        object.workflow_spec = Some(primary);
        object.sub_workflows = closure.sub_workflows.clone();
        object.tasks = closure.tasks.clone();
        object.inputs = Some(inputs.clone());
        Ok(object)
    }
}
