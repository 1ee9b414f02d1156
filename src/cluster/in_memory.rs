use super::{ApiOutcome, DeleteOptions, ExecutionObjectClient, PropagationPolicy};
use crate::models::ExecutionObject;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::debug;
use uuid::Uuid;

/// A delete call as seen by [`InMemoryExecutionClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDelete {
    pub namespace: String,
    pub name: String,
    pub propagation_policy: Option<PropagationPolicy>,
    pub existed: bool,
}

/// Number of recent delete calls kept by default.
pub const DEFAULT_DELETE_HISTORY: usize = 1024;

/// Execution-object store with cluster create/delete semantics, for local
/// runs and tests. Only the most recent delete calls are kept.
#[derive(Debug)]
pub struct InMemoryExecutionClient {
    objects: DashMap<(String, String), ExecutionObject>,
    deletes: Mutex<VecDeque<RecordedDelete>>,
    delete_history: usize,
}

impl Default for InMemoryExecutionClient {
    fn default() -> Self {
        Self::with_delete_history(DEFAULT_DELETE_HISTORY)
    }
}

impl InMemoryExecutionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` delete records; zero disables recording.
    pub fn with_delete_history(capacity: usize) -> Self {
        Self {
            objects: DashMap::new(),
            deletes: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_DELETE_HISTORY))),
            delete_history: capacity,
        }
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<ExecutionObject> {
        self.objects
            .get(&(namespace.to_string(), name.to_string()))
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Recorded delete calls, oldest first.
    pub fn deletes(&self) -> Vec<RecordedDelete> {
        self.deletes.lock().iter().cloned().collect()
    }
}

#[async_trait]
impl ExecutionObjectClient for InMemoryExecutionClient {
    async fn create(&self, namespace: &str, object: &ExecutionObject) -> ApiOutcome {
        let key = (namespace.to_string(), object.name().to_string());
        match self.objects.entry(key) {
            Entry::Occupied(_) => ApiOutcome::AlreadyExists,
            Entry::Vacant(slot) => {
                let mut stored = object.clone();
                stored.metadata.namespace = namespace.to_string();
                stored.metadata.uid = Some(Uuid::new_v4().to_string());
                debug!(namespace, name = %object.name(), "Stored execution object");
                slot.insert(stored);
                ApiOutcome::Success
            }
        }
    }

    async fn delete(&self, namespace: &str, name: &str, options: &DeleteOptions) -> ApiOutcome {
        let existed = self
            .objects
            .remove(&(namespace.to_string(), name.to_string()))
            .is_some();
        if self.delete_history > 0 {
            let mut deletes = self.deletes.lock();
            if deletes.len() == self.delete_history {
                deletes.pop_front();
            }
            deletes.push_back(RecordedDelete {
                namespace: namespace.to_string(),
                name: name.to_string(),
                propagation_policy: options.propagation_policy,
                existed,
            });
        }

        if existed {
            ApiOutcome::Success
        } else {
            ApiOutcome::NotFound
        }
    }
}
