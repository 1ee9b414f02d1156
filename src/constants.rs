//! # System Constants
//!
//! Fixed identifiers and codes shared by the submission and termination paths.

/// Identity reported by [`crate::executor::ClusterWorkflowExecutor::id`].
pub const DEFAULT_EXECUTOR_IDENTIFIER: &str = "DefaultClusterExecutor";

/// Producer id stamped on every event this crate emits.
pub const EVENT_PRODUCER_ID: &str = "cluster_executor";

/// Error code and message carried by the terminal event of an operator abort.
pub mod abort {
    pub const ERROR_CODE: &str = "ExecutionAborted";
    pub const ERROR_MESSAGE: &str = "Execution aborted";
}

/// Environment variable names consulted at startup.
pub mod env {
    pub const ENVIRONMENT: &str = "CLUSTER_EXECUTOR_ENV";
    pub const FALLBACK_ENVIRONMENT: &str = "APP_ENV";
    pub const LOG_FORMAT: &str = "CLUSTER_EXECUTOR_LOG_FORMAT";
    pub const CONFIG_PREFIX: &str = "CLUSTER_EXECUTOR";
}

/// Limits applied to execution labels during preparation.
pub mod labels {
    /// Limit on the name segment, the part after an optional `prefix/`.
    pub const MAX_NAME_LENGTH: usize = 63;
    /// Limit on the optional DNS subdomain prefix.
    pub const MAX_PREFIX_LENGTH: usize = 253;
}
