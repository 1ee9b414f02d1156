#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Cluster Executor Core
//!
//! Submission and termination boundary between a workflow orchestration
//! control plane and a fleet of Kubernetes-style execution clusters.
//!
//! ## Overview
//!
//! The executor takes a compiled workflow execution request, materializes it
//! as a custom resource, routes it to one of several execution clusters and
//! creates it there idempotently. Aborting deletes that resource from the
//! cluster it was created on and reports a terminal `ABORTED` event.
//!
//! ## Key Features
//!
//! - **Payload reduction**: inline closure and inputs are swapped for storage
//!   references when offloading is enabled, keeping stored objects small
//! - **Two-mode routing**: policy routing for new executions, direct by-id
//!   lookup for everything after
//! - **Idempotent operations**: "already exists" on create and "not found" on
//!   delete are successes, so callers can retry freely
//! - **Guarded terminal events**: an abort event is written only once the
//!   object is confirmed gone
//! - **Cancellation**: every remote call honors the caller's
//!   [`context::OperationContext`]
//!
//! ## Module Organization
//!
//! - [`models`] - Execution identity, requests, the execution object, events
//! - [`builder`] - Workflow builder contract
//! - [`preparation`] - Applies execution parameters to a built object
//! - [`reducer`] - Payload reduction
//! - [`cluster`] - Cluster routing and execution-object API contracts
//! - [`submission`] / [`termination`] - Create and abort protocols
//! - [`executor`] - The [`executor::WorkflowExecutor`] façade
//! - [`registry`] - Default/override executor registry
//! - [`events`] - Event writer contract and broadcast writer
//! - [`storage`] - Offloaded data references
//! - [`config`] - Configuration snapshot
//! - [`error`] - Structured error handling
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # Unit and integration tests
//! ```

pub mod builder;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod events;
pub mod executor;
pub mod logging;
pub mod models;
pub mod preparation;
pub mod reducer;
pub mod registry;
pub mod storage;
pub mod submission;
pub mod termination;

pub use cluster::{
    ApiOutcome, ClusterRouter, DeleteOptions, ExecutionObjectClient, ExecutionTargetSpec,
    PropagationPolicy, TargetCluster,
};
pub use config::{ConfigurationError, ExecutorConfig};
pub use context::OperationContext;
pub use error::{
    BuildError, ClusterApiError, ErrorCode, ExecutorError, ExecutorResult, PreparationError,
    RoutingError,
};
pub use events::{BroadcastEventWriter, ExecutionEventWriter};
pub use executor::{ClusterWorkflowExecutor, WorkflowExecutor};
pub use models::{
    AbortRequest, ExecutionIdentity, ExecutionObject, ExecutionRequest, ExecutionResponse,
    WorkflowExecutionEvent, WorkflowExecutionPhase,
};
pub use storage::{DataReference, StorageClient};
