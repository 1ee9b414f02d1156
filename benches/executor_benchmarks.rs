//! Execution Object Reduction Benchmarks
//!
//! Measures the cost of offloading payloads out of a built execution object
//! for each offload mode, over closures of increasing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cluster_executor::config::ExecutorConfig;
use cluster_executor::models::{ExecutionIdentity, ExecutionObject, ExecutionRequest};
use cluster_executor::reducer::reduce;
use cluster_executor::storage::DataReference;
use serde_json::json;
use std::hint::black_box;

fn built_object(task_count: usize) -> ExecutionObject {
    let mut object = ExecutionObject::new(ExecutionIdentity::new("p", "d", "bench"), "p-d");
    object.workflow_spec = Some(json!({"id": "core.bench", "nodes": task_count}));
    for i in 0..task_count {
        object
            .tasks
            .insert(format!("task-{i}"), json!({"type": "python-task", "retries": 3}));
        object
            .sub_workflows
            .insert(format!("sub-{i}"), json!({"nodes": [i, i + 1]}));
    }
    object.inputs = Some((0..task_count).map(|i| (format!("in-{i}"), json!(i))).collect());
    object
}

fn offloaded_request() -> ExecutionRequest {
    ExecutionRequest {
        namespace: "p-d".into(),
        execution_id: ExecutionIdentity::new("p", "d", "bench"),
        workflow_closure_reference: Some(DataReference::from("ref://p/d/bench/closure")),
        offloaded_inputs_reference: Some(DataReference::from("ref://p/d/bench/inputs")),
        ..ExecutionRequest::default()
    }
}

fn benchmark_reduce(c: &mut Criterion) {
    let request = offloaded_request();
    let modes = [
        ("inline", ExecutorConfig::default()),
        (
            "offload_all",
            ExecutorConfig::default()
                .with_offloaded_workflow_closure(true)
                .with_offloaded_inputs(true),
        ),
    ];

    let mut group = c.benchmark_group("reduce");
    for task_count in [10usize, 100, 1000] {
        let object = built_object(task_count);
        for (mode, config) in &modes {
            group.bench_with_input(BenchmarkId::new(*mode, task_count), &object, |b, object| {
                b.iter(|| reduce(black_box(object.clone()), &request, config))
            });
        }
    }
    group.finish();
}

fn benchmark_encoded_size(c: &mut Criterion) {
    let object = built_object(1000);
    c.bench_function("encoded_size_1000_tasks", |b| {
        b.iter(|| black_box(&object).encoded_size())
    });
}

criterion_group!(benches, benchmark_reduce, benchmark_encoded_size);
criterion_main!(benches);
