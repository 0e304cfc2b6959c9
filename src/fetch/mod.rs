//! Page retrieval through a cross-origin relay.
//!
//! The scanner never talks to the target site directly: the relay fetches it
//! server-side and hands back the body inside a JSON envelope. One attempt
//! per scan; every failure is terminal for the scan that issued it.

use log::debug;
use serde::Deserialize;

use crate::error_handling::ScanError;

/// JSON envelope returned by the relay.
///
/// The relay reports request metadata alongside the body; only `contents`
/// matters here and unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ProxyEnvelope {
    #[serde(default)]
    pub contents: Option<String>,
}

/// Fetches the raw markup for `target_url` through the relay at `endpoint`.
///
/// Issues a single GET with the target embedded as a url-encoded `url=`
/// query parameter, then unwraps the envelope.
///
/// # Errors
///
/// - [`ScanError::ProxyUnreachable`] when the relay answers with a non-2xx
///   status; the message carries the numeric status.
/// - [`ScanError::ProxyEmptyResponse`] when the envelope carries no content,
///   which usually means the target site blocks proxied access.
/// - [`ScanError::RequestFailed`] for transport or envelope-decode failures.
pub async fn fetch_via_proxy(
    client: &reqwest::Client,
    endpoint: &str,
    target_url: &str,
) -> Result<String, ScanError> {
    debug!("Fetching {target_url} via relay {endpoint}");

    let response = client
        .get(endpoint)
        .query(&[("url", target_url)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScanError::ProxyUnreachable(status.as_u16()));
    }

    let envelope: ProxyEnvelope = response.json().await?;
    match envelope.contents {
        Some(contents) if !contents.is_empty() => {
            debug!("Relay returned {} bytes for {target_url}", contents.len());
            Ok(contents)
        }
        _ => Err(ScanError::ProxyEmptyResponse),
    }
}
