use super::{ExecutionIdentity, LiteralMap};
use crate::storage::DataReference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Compiled workflow: primary template plus everything it references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowClosure {
    pub primary_template_id: String,
    pub primary: Option<Value>,
    #[serde(default)]
    pub sub_workflows: BTreeMap<String, Value>,
    #[serde(default)]
    pub tasks: BTreeMap<String, Value>,
}

/// Per-execution settings chosen by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParameters {
    #[serde(default)]
    pub inputs: LiteralMap,
    /// Affinity label consulted by policy routing.
    #[serde(default)]
    pub execution_cluster_label: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub service_account: Option<String>,
    #[serde(default)]
    pub raw_output_data_prefix: Option<String>,
    #[serde(default)]
    pub max_parallelism: Option<u32>,
    #[serde(default)]
    pub interruptible: Option<bool>,
    #[serde(default)]
    pub overwrite_cache: bool,
    #[serde(default)]
    pub envs: BTreeMap<String, String>,
}

/// Everything needed to submit one execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub namespace: String,
    pub execution_id: ExecutionIdentity,
    /// Workflow name used for routing decisions.
    pub reference_workflow_name: String,
    pub workflow_closure: WorkflowClosure,
    #[serde(default)]
    pub workflow_closure_reference: Option<DataReference>,
    #[serde(default)]
    pub parameters: ExecutionParameters,
    #[serde(default)]
    pub offloaded_inputs_reference: Option<DataReference>,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResponse {
    /// Cluster that holds the execution object; abort and status calls must
    /// be routed here by id.
    pub cluster: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbortRequest {
    pub execution_id: ExecutionIdentity,
    pub namespace: String,
    pub cluster: String,
}
