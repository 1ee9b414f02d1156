//! # Execution Clusters
//!
//! Contracts for reaching the clusters that run workflow executions.
//!
//! ## Routing
//!
//! [`ClusterRouter`] resolves a [`TargetCluster`] in one of two ways:
//!
//! - **policy**: [`ClusterRouter::resolve_for_submit`] picks a cluster for a new
//!   execution from its project, domain, workflow and affinity label. The
//!   policy is owned by the router implementation and opaque to the executor.
//! - **direct**: [`ClusterRouter::resolve_by_id`] returns the cluster recorded
//!   at submission time. Everything that touches an already submitted
//!   execution uses this path, since the object only exists where it was
//!   created.
//!
//! ## Object API
//!
//! [`ExecutionObjectClient`] creates and deletes execution objects. Results are
//! reported as an [`ApiOutcome`] so callers inspect "already exists" and "not
//! found" explicitly.

pub mod in_cluster;
pub mod in_memory;

pub use in_cluster::{InClusterRouter, DEFAULT_IN_CLUSTER_ID};
pub use in_memory::{InMemoryExecutionClient, RecordedDelete};

use crate::error::{ClusterApiError, RoutingError};
use crate::models::ExecutionObject;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Routing inputs for one execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTargetSpec {
    pub project: String,
    pub domain: String,
    pub workflow: String,
    pub launch_plan: String,
    pub execution_id: String,
    pub execution_cluster_label: Option<String>,
}

/// Outcome of a create or delete call against a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Success,
    AlreadyExists,
    NotFound,
    Failed(ClusterApiError),
}

impl ApiOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropagationPolicy {
    /// Leave dependents behind.
    Orphan,
    /// Acknowledge immediately, remove dependents asynchronously.
    Background,
    /// Block until all dependents are gone.
    Foreground,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOptions {
    pub propagation_policy: Option<PropagationPolicy>,
}

impl DeleteOptions {
    pub fn background() -> Self {
        Self {
            propagation_policy: Some(PropagationPolicy::Background),
        }
    }
}

/// Namespaced create/delete access to execution objects on one cluster.
#[async_trait]
pub trait ExecutionObjectClient: Send + Sync + fmt::Debug {
    async fn create(&self, namespace: &str, object: &ExecutionObject) -> ApiOutcome;

    async fn delete(&self, namespace: &str, name: &str, options: &DeleteOptions) -> ApiOutcome;
}

/// A resolved cluster: its id and a handle to its execution-object API.
#[derive(Clone)]
pub struct TargetCluster {
    pub id: String,
    pub client: Arc<dyn ExecutionObjectClient>,
}

impl TargetCluster {
    pub fn new(id: impl Into<String>, client: Arc<dyn ExecutionObjectClient>) -> Self {
        Self {
            id: id.into(),
            client,
        }
    }
}

impl fmt::Debug for TargetCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetCluster").field("id", &self.id).finish()
    }
}

#[async_trait]
pub trait ClusterRouter: Send + Sync + fmt::Debug {
    /// Policy-based selection for a new execution.
    async fn resolve_for_submit(
        &self,
        spec: &ExecutionTargetSpec,
    ) -> Result<TargetCluster, RoutingError>;

    /// Direct lookup of a cluster recorded at submission time.
    async fn resolve_by_id(&self, cluster_id: &str) -> Result<TargetCluster, RoutingError>;
}
