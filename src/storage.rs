//! # Offloaded Data References
//!
//! The executor never touches blob content. It only carries locators for
//! closures and inputs that callers already wrote to storage, and hands the
//! storage handle through to whoever rehydrates them at execution time.

use crate::models::ExecutionIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// URI of an object in blob storage, e.g. `s3://bucket/p/d/e1/closure`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataReference(String);

impl DataReference {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DataReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DataReference {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

/// Storage handle shared with the rest of the control plane.
pub trait StorageClient: Send + Sync + fmt::Debug {
    /// Build a reference to `segments` under this client's base container.
    fn construct_reference(&self, segments: &[&str]) -> DataReference;
}

/// Joins reference segments beneath a fixed base such as `ref://` or
/// `s3://my-bucket/metadata`.
#[derive(Debug, Clone)]
pub struct PrefixStorageClient {
    base: String,
}

impl PrefixStorageClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl StorageClient for PrefixStorageClient {
    fn construct_reference(&self, segments: &[&str]) -> DataReference {
        let mut uri = self.base.clone();
        for segment in segments.iter().map(|s| s.trim_matches('/')).filter(|s| !s.is_empty()) {
            if !uri.is_empty() && !uri.ends_with('/') {
                uri.push('/');
            }
            uri.push_str(segment);
        }
        DataReference(uri)
    }
}

/// Pre-established locations of one execution's offloaded closure and inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffloadLocations {
    pub closure: DataReference,
    pub inputs: DataReference,
}

impl OffloadLocations {
    pub fn for_execution(storage: &dyn StorageClient, execution: &ExecutionIdentity) -> Self {
        let locate = |leaf: &str| {
            storage.construct_reference(&[
                execution.project.as_str(),
                execution.domain.as_str(),
                execution.name.as_str(),
                leaf,
            ])
        };
        Self {
            closure: locate("closure"),
            inputs: locate("inputs"),
        }
    }
}
