//! # Payload Reducer
//!
//! Shrinks a prepared [`ExecutionObject`] before submission. The object is
//! stored by the cluster and re-read by every downstream controller, so when
//! offloading is enabled the inline closure and inputs are swapped for the
//! storage references the request already carries; consumers rehydrate them
//! at execution time.
//!
//! Reduction is a pure function of (object, request, config). The three
//! transformations are independent of each other and idempotent.

use crate::config::ExecutorConfig;
use crate::models::{ExecutionObject, ExecutionRequest};

pub fn reduce(
    mut object: ExecutionObject,
    request: &ExecutionRequest,
    config: &ExecutorConfig,
) -> ExecutionObject {
    if config.use_offloaded_workflow_closure {
        object.workflow_closure_reference = request.workflow_closure_reference.clone();
        object.workflow_spec = None;
        object.sub_workflows.clear();
        object.tasks.clear();
    }

    if config.use_offloaded_inputs {
        object.offloaded_inputs = request.offloaded_inputs_reference.clone();
        object.inputs = None;
    }

    if !config.console_url.is_empty() {
        object.console_url = Some(config.console_url.clone());
    }

    object
}
