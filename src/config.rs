//! # Executor Configuration
//!
//! Process-wide, read-only settings that shape the submitted payload. The
//! snapshot is loaded once at startup and shared behind an `Arc`; nothing in
//! the executor mutates it afterwards.
//!
//! ## Sources
//!
//! Layered in order, later sources overriding earlier ones:
//!
//! 1. built-in defaults (no offloading, no console URL)
//! 2. an optional file (`.toml`, `.yaml` or `.json`, chosen by extension)
//! 3. `CLUSTER_EXECUTOR_*` environment variables, e.g.
//!    `CLUSTER_EXECUTOR_USE_OFFLOADED_INPUTS=true`
//!
//! ```rust,no_run
//! use cluster_executor::config::ExecutorConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExecutorConfig::load(Some(Path::new("config/executor.toml")))?;
//! println!("closure offloading: {}", config.use_offloaded_workflow_closure);
//! # Ok(())
//! # }
//! ```

use crate::constants::env;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Replace the inline closure with a storage reference before submission.
    pub use_offloaded_workflow_closure: bool,
    /// Replace inline inputs with a storage reference before submission.
    pub use_offloaded_inputs: bool,
    /// Console base URL stamped on every submitted object. Empty disables.
    pub console_url: String,
}

impl ExecutorConfig {
    /// Load defaults, then `path` if given, then environment overrides.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "Loading executor configuration file");
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(env::CONFIG_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config: ExecutorConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            use_offloaded_workflow_closure = config.use_offloaded_workflow_closure,
            use_offloaded_inputs = config.use_offloaded_inputs,
            console_url = %config.console_url,
            "Executor configuration loaded"
        );
        Ok(config)
    }

    pub fn from_env() -> ConfigResult<Self> {
        Self::load(None)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.console_url.is_empty()
            && !(self.console_url.starts_with("http://") || self.console_url.starts_with("https://"))
        {
            return Err(ConfigurationError::InvalidValue {
                field: "console_url".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.console_url),
            });
        }
        Ok(())
    }

    pub fn with_offloaded_workflow_closure(mut self, enabled: bool) -> Self {
        self.use_offloaded_workflow_closure = enabled;
        self
    }

    pub fn with_offloaded_inputs(mut self, enabled: bool) -> Self {
        self.use_offloaded_inputs = enabled;
        self
    }

    pub fn with_console_url(mut self, console_url: impl Into<String>) -> Self {
        self.console_url = console_url.into();
        self
    }
}
