//! # Operation Context
//!
//! Caller-supplied cancellation and deadline for a single executor call. Every
//! remote call made on behalf of the caller goes through
//! [`OperationContext::run`], which drops the in-flight future as soon as the
//! token fires or the deadline passes.

use crate::error::{ExecutorError, ExecutorResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl OperationContext {
    /// Context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self {
            cancellation,
            deadline: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Drive `future` to completion unless the context ends first.
    pub async fn run<F, T>(&self, operation: &str, future: F) -> ExecutorResult<T>
    where
        F: Future<Output = T>,
    {
        if self.cancellation.is_cancelled() {
            return Err(ExecutorError::Cancelled {
                operation: operation.to_string(),
            });
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(ExecutorError::Cancelled {
                operation: operation.to_string(),
            }),
            _ = deadline => Err(ExecutorError::DeadlineExceeded {
                operation: operation.to_string(),
            }),
            output = future => Ok(output),
        }
    }
}
