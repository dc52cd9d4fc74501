//! Per-call deadline for store operations

use std::future::Future;
use std::time::Duration;

use tasker_domain::error::{Error, Result};
use tracing::warn;

/// Await a store call, failing with `Internal` when it outlives `timeout`
pub(crate) async fn with_deadline<T, F>(timeout: Duration, operation: &str, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, timeout_ms = timeout.as_millis(), "store call timed out");
            Err(Error::internal(format!("Store call '{operation}' timed out")))
        }
    }
}
