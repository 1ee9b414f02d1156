//! # Workflow Preparation
//!
//! Applies caller-chosen execution parameters to a freshly built object:
//! metadata, labels and annotations, security and output settings, and
//! runtime overrides. Runs before payload reduction.

use crate::constants::labels::{MAX_NAME_LENGTH, MAX_PREFIX_LENGTH};
use crate::error::PreparationError;
use crate::models::{ExecutionObject, ExecutionRequest};
use chrono::Utc;

pub fn prepare_execution_object(
    request: &ExecutionRequest,
    object: &mut ExecutionObject,
) -> Result<(), PreparationError> {
    let params = &request.parameters;

    for key in params.labels.keys() {
        validate_label_key(key)?;
    }

    object.execution_id = request.execution_id.clone();
    object.metadata.name = request.execution_id.name.clone();
    object.metadata.namespace = request.namespace.clone();
    object
        .metadata
        .labels
        .extend(params.labels.iter().map(|(k, v)| (k.clone(), v.clone())));
    object
        .metadata
        .annotations
        .extend(params.annotations.iter().map(|(k, v)| (k.clone(), v.clone())));

    object.accepted_at = Some(params.accepted_at.unwrap_or_else(Utc::now));

    if let Some(service_account) = &params.service_account {
        object.service_account = Some(service_account.clone());
    }
    if let Some(prefix) = &params.raw_output_data_prefix {
        object.raw_output_data_prefix = Some(prefix.clone());
    }
    if let Some(max_parallelism) = params.max_parallelism {
        object.max_parallelism = Some(max_parallelism);
    }
    if let Some(interruptible) = params.interruptible {
        object.interruptible = Some(interruptible);
    }
    object.overwrite_cache = object.overwrite_cache || params.overwrite_cache;
    object
        .envs
        .extend(params.envs.iter().map(|(k, v)| (k.clone(), v.clone())));

    Ok(())
}

fn validate_label_key(key: &str) -> Result<(), PreparationError> {
    let invalid = |reason: &str| PreparationError::InvalidLabel {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("key must not be empty"));
    }
    let (prefix, name) = match key.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, key),
    };

    if let Some(prefix) = prefix {
        if prefix.is_empty() || prefix.len() > MAX_PREFIX_LENGTH {
            return Err(invalid("prefix must be 1 to 253 characters"));
        }
        if !prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-'))
        {
            return Err(invalid("prefix must be a lowercase DNS subdomain"));
        }
    }

    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        return Err(invalid("name must be 1 to 63 characters"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(invalid("name contains characters outside [A-Za-z0-9._-]"));
    }
    Ok(())
}
