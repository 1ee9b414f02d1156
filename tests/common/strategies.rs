use cluster_executor::config::ExecutorConfig;
use cluster_executor::models::{ExecutionIdentity, ExecutionObject, ExecutionRequest};
use cluster_executor::storage::DataReference;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Strategy for generating Kubernetes-friendly object names
pub fn object_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,19}"
}

/// Strategy for generating opaque JSON payloads
pub fn payload_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({})),
        any::<i64>().prop_map(|n| json!({"retries": n})),
        "[a-z_]{1,12}".prop_map(|s| json!({"type": s})),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(|v| json!({"nodes": v})),
    ]
}

pub fn payload_map_strategy() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map(object_name_strategy(), payload_strategy(), 0..4)
}

/// Strategy for generating built execution objects: arbitrary inline
/// payloads, sometimes a console URL, never a reference
pub fn execution_object_strategy() -> impl Strategy<Value = ExecutionObject> {
    (
        object_name_strategy(),
        prop::option::of(payload_strategy()),
        payload_map_strategy(),
        payload_map_strategy(),
        prop::option::of(payload_map_strategy()),
        prop::option::of("https://[a-z]{1,10}\\.example\\.com"),
    )
        .prop_map(
            |(name, spec, sub_workflows, tasks, inputs, console_url)| {
                let mut object = ExecutionObject::new(ExecutionIdentity::new("p", "d", name), "p-d");
                object.workflow_spec = spec;
                object.sub_workflows = sub_workflows;
                object.tasks = tasks;
                object.inputs = inputs;
                object.console_url = console_url;
                object
            },
        )
}

pub fn request_strategy() -> impl Strategy<Value = ExecutionRequest> {
    (object_name_strategy(), any::<bool>(), any::<bool>()).prop_map(
        |(name, with_closure_ref, with_inputs_ref)| ExecutionRequest {
            namespace: "p-d".to_string(),
            execution_id: ExecutionIdentity::new("p", "d", name.clone()),
            workflow_closure_reference: with_closure_ref
                .then(|| DataReference::new(format!("ref://p/d/{name}/closure"))),
            offloaded_inputs_reference: with_inputs_ref
                .then(|| DataReference::new(format!("ref://p/d/{name}/inputs"))),
            ..ExecutionRequest::default()
        },
    )
}

/// Strategy covering all four offload flag combinations, with and without a
/// console URL
pub fn executor_config_strategy() -> impl Strategy<Value = ExecutorConfig> {
    (
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just(String::new()), Just("https://console.example.com".to_string())],
    )
        .prop_map(|(closure, inputs, console_url)| ExecutorConfig {
            use_offloaded_workflow_closure: closure,
            use_offloaded_inputs: inputs,
            console_url,
        })
}
