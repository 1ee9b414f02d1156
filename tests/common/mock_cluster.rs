//! Mock Cluster Implementations for Testing
//!
//! A cluster client that tracks stored objects and can be scripted to fail,
//! and a router whose submission policy can be repointed mid-test while
//! recording how each lookup was made.

use async_trait::async_trait;
use cluster_executor::cluster::{
    ApiOutcome, ClusterRouter, DeleteOptions, ExecutionObjectClient, ExecutionTargetSpec,
    TargetCluster,
};
use cluster_executor::error::RoutingError;
use cluster_executor::models::ExecutionObject;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock cluster state for tracking calls and simulating behavior
#[derive(Debug, Default, Clone)]
pub struct MockClusterState {
    /// Objects currently stored, keyed by (namespace, name)
    pub objects: HashMap<(String, String), ExecutionObject>,
    /// Every create call, in order
    pub create_calls: Vec<(String, ExecutionObject)>,
    /// Every delete call, in order
    pub delete_calls: Vec<(String, String, DeleteOptions)>,
    /// Outcomes returned instead of the stored-object behavior
    pub scripted_creates: VecDeque<ApiOutcome>,
    pub scripted_deletes: VecDeque<ApiOutcome>,
}

#[derive(Debug, Default)]
pub struct MockClusterClient {
    state: Arc<Mutex<MockClusterState>>,
    /// Simulate a slow API server
    latency: Option<Duration>,
}

impl MockClusterClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn script_create(&self, outcome: ApiOutcome) {
        self.state.lock().unwrap().scripted_creates.push_back(outcome);
    }

    pub fn script_delete(&self, outcome: ApiOutcome) {
        self.state.lock().unwrap().scripted_deletes.push_back(outcome);
    }

    /// Seed an object as if an earlier submission had created it.
    pub fn insert(&self, namespace: &str, object: ExecutionObject) {
        self.state
            .lock()
            .unwrap()
            .objects
            .insert((namespace.to_string(), object.name().to_string()), object);
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<ExecutionObject> {
        self.state
            .lock()
            .unwrap()
            .objects
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    /// Get the current state for assertions
    pub fn get_state(&self) -> MockClusterState {
        self.state.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExecutionObjectClient for MockClusterClient {
    async fn create(&self, namespace: &str, object: &ExecutionObject) -> ApiOutcome {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.state.lock().unwrap();
        state
            .create_calls
            .push((namespace.to_string(), object.clone()));

        if let Some(outcome) = state.scripted_creates.pop_front() {
            return outcome;
        }

        let key = (namespace.to_string(), object.name().to_string());
        if state.objects.contains_key(&key) {
            return ApiOutcome::AlreadyExists;
        }
        state.objects.insert(key, object.clone());
        ApiOutcome::Success
    }

    async fn delete(&self, namespace: &str, name: &str, options: &DeleteOptions) -> ApiOutcome {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.state.lock().unwrap();
        state
            .delete_calls
            .push((namespace.to_string(), name.to_string(), *options));

        if let Some(outcome) = state.scripted_deletes.pop_front() {
            return outcome;
        }

        match state.objects.remove(&(namespace.to_string(), name.to_string())) {
            Some(_) => ApiOutcome::Success,
            None => ApiOutcome::NotFound,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterCalls {
    pub submit_specs: Vec<ExecutionTargetSpec>,
    pub lookups_by_id: Vec<String>,
}

/// Router over a fixed set of clusters whose submission policy always picks
/// `policy_target`.
#[derive(Debug)]
pub struct PolicyRouter {
    clusters: HashMap<String, Arc<MockClusterClient>>,
    policy_target: Mutex<Option<String>>,
    calls: Mutex<RouterCalls>,
}

impl PolicyRouter {
    pub fn new(cluster_ids: &[&str]) -> Self {
        let clusters = cluster_ids
            .iter()
            .map(|id| (id.to_string(), Arc::new(MockClusterClient::new())))
            .collect();
        Self {
            clusters,
            policy_target: Mutex::new(cluster_ids.first().map(|id| id.to_string())),
            calls: Mutex::new(RouterCalls::default()),
        }
    }

    pub fn with_client(mut self, id: &str, client: MockClusterClient) -> Self {
        self.clusters.insert(id.to_string(), Arc::new(client));
        self
    }

    pub fn route_submissions_to(&self, id: Option<&str>) {
        *self.policy_target.lock().unwrap() = id.map(str::to_string);
    }

    pub fn client(&self, id: &str) -> Arc<MockClusterClient> {
        self.clusters
            .get(id)
            .cloned()
            .unwrap_or_else(|| panic!("no mock cluster {id}"))
    }

    pub fn calls(&self) -> RouterCalls {
        self.calls.lock().unwrap().clone()
    }

    fn target(&self, id: &str) -> Option<TargetCluster> {
        self.clusters
            .get(id)
            .map(|client| TargetCluster::new(id, client.clone()))
    }
}

#[async_trait]
impl ClusterRouter for PolicyRouter {
    async fn resolve_for_submit(
        &self,
        spec: &ExecutionTargetSpec,
    ) -> Result<TargetCluster, RoutingError> {
        self.calls.lock().unwrap().submit_specs.push(spec.clone());
        let chosen = self.policy_target.lock().unwrap().clone();
        chosen
            .and_then(|id| self.target(&id))
            .ok_or_else(|| RoutingError::NoTargetAvailable {
                project: spec.project.clone(),
                domain: spec.domain.clone(),
                label: spec.execution_cluster_label.clone(),
            })
    }

    async fn resolve_by_id(&self, cluster_id: &str) -> Result<TargetCluster, RoutingError> {
        self.calls
            .lock()
            .unwrap()
            .lookups_by_id
            .push(cluster_id.to_string());
        self.target(cluster_id)
            .ok_or_else(|| RoutingError::UnknownCluster {
                cluster_id: cluster_id.to_string(),
            })
    }
}
