use provsign_core::{Context, OsEnv, Result};
use provsign_file_write_tokio::TokioFileWrite;
use provsign_http_send_reqwest::ReqwestHttpSend;
use std::time::Duration;

/// Create a context with reqwest for HTTP, tokio for file writes and the OS
/// environment.
///
/// The reqwest client has no timeout, use [`default_context_with_timeout`] to
/// bound provider calls.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
        .with_file_write(TokioFileWrite)
}

/// Create the default context with every HTTP call failing after `timeout`.
///
/// A timed out call surfaces as a retryable transport error.
pub fn default_context_with_timeout(timeout: Duration) -> Result<Context> {
    Ok(default_context().with_http_send(ReqwestHttpSend::with_timeout(timeout)?))
}
