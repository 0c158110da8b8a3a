//! Timeout wrapper for individual browser operations.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;

/// Run one page operation under an explicit timeout.
///
/// Keeps a wedged CDP call from stalling the whole capture; the error
/// names the operation so capture diagnostics stay readable.
pub(crate) async fn with_op_timeout<F, T>(
    operation: F,
    timeout: Duration,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timed out after {timeout:?}"
        )),
    }
}
