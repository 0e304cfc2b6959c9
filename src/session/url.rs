//! Target URL validation and normalization.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a scan target.
///
/// Prepends `https://` when no scheme prefix is present, then checks the
/// result is a syntactically valid http(s) URL. Empty, over-length, or
/// invalid input yields `None`; the caller drops the scan request without
/// touching session state.
pub fn normalize_scan_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {MAX_URL_LENGTH}): {}...",
            url.len(),
            &url[..50.min(url.len())]
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    match url::Url::parse(&normalized) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Some(normalized),
        Ok(_) => {
            warn!("Rejecting unsupported scheme for URL: {url}");
            None
        }
        Err(_) => {
            warn!("Rejecting invalid URL: {url}");
            None
        }
    }
}
