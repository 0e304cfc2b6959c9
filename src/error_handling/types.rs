//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures that terminate a single scan attempt.
///
/// Every variant's `Display` string is the exact user-facing message stored
/// in the session's `scan_error` field. There are no retries; each failure
/// is terminal for the scan that produced it.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The relay answered, but with a failing HTTP status.
    #[error("The proxy could not reach the URL (status {0}).")]
    ProxyUnreachable(u16),

    /// The relay answered 2xx but its envelope carried no content. Distinct
    /// from a transport failure: the target site likely blocks proxied
    /// access.
    #[error("The proxy returned an empty response. The URL may be blocking proxies.")]
    ProxyEmptyResponse,

    /// Transport-level or envelope-decode failure talking to the relay.
    #[error("Proxy request failed: {0}")]
    RequestFailed(#[from] ReqwestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_unreachable_message_carries_status() {
        let error = ScanError::ProxyUnreachable(404);
        assert_eq!(
            error.to_string(),
            "The proxy could not reach the URL (status 404)."
        );
    }

    #[test]
    fn test_proxy_empty_response_message_mentions_blocking() {
        let error = ScanError::ProxyEmptyResponse;
        assert!(error.to_string().contains("blocking proxies"));
    }
}
