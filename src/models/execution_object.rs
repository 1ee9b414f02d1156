//! # Execution Object
//!
//! The custom resource submitted to an execution cluster for one workflow
//! execution. Workflow, sub-workflow and task payloads are carried as opaque
//! JSON produced by the builder; this crate moves them around but never reads
//! them.
//!
//! Closure and inputs each have two mutually exclusive representations: inline
//! (`workflow_spec`/`sub_workflows`/`tasks`, `inputs`) or a reference into
//! blob storage (`workflow_closure_reference`, `offloaded_inputs`). See
//! [`ExecutionObject::is_payload_consistent`].

use super::ExecutionIdentity;
use crate::storage::DataReference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Named literal values bound to workflow inputs.
pub type LiteralMap = BTreeMap<String, Value>;

/// Object metadata as understood by the cluster API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// Assigned by the cluster on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionObject {
    pub metadata: ObjectMeta,
    pub execution_id: ExecutionIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_spec: Option<Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sub_workflows: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tasks: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<LiteralMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_closure_reference: Option<DataReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offloaded_inputs: Option<DataReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output_data_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallelism: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interruptible: Option<bool>,
    #[serde(default)]
    pub overwrite_cache: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub envs: BTreeMap<String, String>,
}

impl ExecutionObject {
    pub fn new(execution_id: ExecutionIdentity, namespace: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: execution_id.name.clone(),
                namespace: namespace.into(),
                ..ObjectMeta::default()
            },
            execution_id,
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn has_inline_closure(&self) -> bool {
        self.workflow_spec.is_some() || !self.sub_workflows.is_empty() || !self.tasks.is_empty()
    }

    pub fn has_inline_inputs(&self) -> bool {
        self.inputs.is_some()
    }

    /// A set reference excludes the matching inline payload.
    pub fn is_payload_consistent(&self) -> bool {
        let closure_ok = self.workflow_closure_reference.is_none() || !self.has_inline_closure();
        let inputs_ok = self.offloaded_inputs.is_none() || !self.has_inline_inputs();
        closure_ok && inputs_ok
    }

    /// Size of the object as it would be written to the cluster, in bytes.
    pub fn encoded_size(&self) -> usize {
        serde_json::to_vec(self).map_or(0, |bytes| bytes.len())
    }
}
