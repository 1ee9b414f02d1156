//! # Structured Logging Module
//!
//! Environment-aware structured logging for the executor. Output goes to the
//! console, as JSON when `CLUSTER_EXECUTOR_LOG_FORMAT=json`, otherwise in the
//! human-readable format.

use crate::constants::env;
use crate::models::ExecutionIdentity;
use chrono::Utc;
use std::process;
use std::sync::OnceLock;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));
        let json = std::env::var(env::LOG_FORMAT)
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let layer: Box<dyn Layer<Registry> + Send + Sync> = if json {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // An embedding process may already own the global subscriber.
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(
            pid = process::id(),
            environment = %environment,
            json,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var(env::ENVIRONMENT)
        .or_else(|_| std::env::var(env::FALLBACK_ENVIRONMENT))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log structured data for a completed executor operation
pub fn log_execution_operation(
    operation: &str,
    execution: &ExecutionIdentity,
    cluster: Option<&str>,
    status: &str,
) {
    tracing::info!(
        operation = %operation,
        project = %execution.project,
        domain = %execution.domain,
        name = %execution.name,
        cluster = cluster,
        status = %status,
        timestamp = %Utc::now().to_rfc3339(),
        "EXECUTION_OPERATION"
    );
}
