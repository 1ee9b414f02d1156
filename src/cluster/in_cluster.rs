//! Single-cluster deployment: the control plane runs next to the only
//! execution cluster it submits to.

use super::{ClusterRouter, ExecutionObjectClient, ExecutionTargetSpec, TargetCluster};
use crate::error::RoutingError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_IN_CLUSTER_ID: &str = "in_cluster";

#[derive(Debug, Clone)]
pub struct InClusterRouter {
    target: TargetCluster,
}

impl InClusterRouter {
    pub fn new(client: Arc<dyn ExecutionObjectClient>) -> Self {
        Self::with_id(DEFAULT_IN_CLUSTER_ID, client)
    }

    pub fn with_id(id: impl Into<String>, client: Arc<dyn ExecutionObjectClient>) -> Self {
        Self {
            target: TargetCluster::new(id, client),
        }
    }

    pub fn cluster_id(&self) -> &str {
        &self.target.id
    }
}

#[async_trait]
impl ClusterRouter for InClusterRouter {
    async fn resolve_for_submit(
        &self,
        spec: &ExecutionTargetSpec,
    ) -> Result<TargetCluster, RoutingError> {
        debug!(
            project = %spec.project,
            domain = %spec.domain,
            cluster = %self.target.id,
            "Routing execution to in-cluster target"
        );
        Ok(self.target.clone())
    }

    /// An empty id is accepted for executions recorded before the cluster id
    /// was tracked.
    async fn resolve_by_id(&self, cluster_id: &str) -> Result<TargetCluster, RoutingError> {
        if cluster_id.is_empty() || cluster_id == self.target.id {
            return Ok(self.target.clone());
        }
        Err(RoutingError::UnknownCluster {
            cluster_id: cluster_id.to_string(),
        })
    }
}
