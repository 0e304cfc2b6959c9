//! Configuration constants.
//!
//! Defaults for the relay endpoint and the operational limits of a scan.

/// Default cross-origin relay endpoint.
///
/// allorigins.win is a free, open-source CORS proxy. It fetches the target
/// server-side and returns the body inside a JSON envelope whose `contents`
/// field holds the raw markup.
pub const DEFAULT_PROXY_ENDPOINT: &str = "https://api.allorigins.win/get";

/// Default fetch timeout in seconds.
///
/// The relay adds its own round-trip on top of the target's response time,
/// so this is deliberately generous. There is no cancellation primitive for
/// an in-flight scan; this client-level timeout is the only bound.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Maximum accepted target URL length. Matches common browser and server
/// limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent for relay requests.
pub const DEFAULT_USER_AGENT: &str = "friction_scan/0.1";
