//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Builds the shared HTTP client used for relay requests.
///
/// One client per session: connection pooling carries over between scans,
/// and the configured timeout bounds every fetch. The timeout is the only
/// bound on an in-flight scan; there is no cancellation primitive.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be
/// constructed.
pub fn init_http_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;

    Ok(client)
}
