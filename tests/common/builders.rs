//! Request fixtures and a scriptable workflow builder.

use cluster_executor::builder::{PassThroughWorkflowBuilder, WorkflowBuilder};
use cluster_executor::error::BuildError;
use cluster_executor::models::{
    ExecutionIdentity, ExecutionObject, ExecutionRequest, LiteralMap, WorkflowClosure,
};
use cluster_executor::storage::DataReference;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request for `project/domain/name` with a small inline closure and one
/// input, carrying `ref://` locations for both offloadable payloads.
pub fn execution_request(project: &str, domain: &str, name: &str) -> ExecutionRequest {
    let mut request = ExecutionRequest {
        namespace: format!("{project}-{domain}"),
        execution_id: ExecutionIdentity::new(project, domain, name),
        reference_workflow_name: "core.hello_world".to_string(),
        workflow_closure: WorkflowClosure {
            primary_template_id: "core.hello_world".to_string(),
            primary: Some(json!({"id": "core.hello_world", "nodes": ["start", "say_hello", "end"]})),
            sub_workflows: [("core.greeting".to_string(), json!({"nodes": ["greet"]}))].into(),
            tasks: [("say_hello".to_string(), json!({"type": "python-task"}))].into(),
        },
        workflow_closure_reference: Some(DataReference::new(format!(
            "ref://{project}/{domain}/{name}/closure"
        ))),
        offloaded_inputs_reference: Some(DataReference::new(format!(
            "ref://{project}/{domain}/{name}/inputs"
        ))),
        ..ExecutionRequest::default()
    };
    request
        .parameters
        .inputs
        .insert("name".to_string(), json!("world"));
    request
}

pub fn inline_inputs() -> LiteralMap {
    LiteralMap::from([("name".to_string(), json!("world"))])
}

/// Builder that can be told to fail, counting every call.
#[derive(Debug, Default)]
pub struct ScriptedWorkflowBuilder {
    failure: Option<BuildError>,
    console_url: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedWorkflowBuilder {
    pub fn failing(error: BuildError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Objects come out of the builder already carrying `url`.
    pub fn with_console_url(url: impl Into<String>) -> Self {
        Self {
            console_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WorkflowBuilder for ScriptedWorkflowBuilder {
    fn build(
        &self,
        closure: &WorkflowClosure,
        inputs: &LiteralMap,
        execution_id: &ExecutionIdentity,
        namespace: &str,
    ) -> Result<ExecutionObject, BuildError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let mut object = PassThroughWorkflowBuilder.build(closure, inputs, execution_id, namespace)?;
        object.console_url = self.console_url.clone();
        Ok(object)
    }
}
