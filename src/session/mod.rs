//! Scan session state and pipeline orchestration.
//!
//! The session is an explicit object owned by the hosting application - no
//! process-wide singleton. `start_scan` writes its outcome back into the
//! session fields rather than returning a value, so consumers observe
//! completion through the read accessors.

mod id;
mod stats;
mod url;

pub use id::PointIdGenerator;
pub use stats::SessionStats;
pub use url::normalize_scan_url;

use log::{info, warn};

use crate::config::Config;
use crate::error_handling::ScanError;
use crate::models::{FrictionPoint, FrictionStatus};
use crate::{fetch, parse, rules, spa};

/// Terminal message for a clean scan: the rule battery found nothing and the
/// markup shows no client-side-rendering markers.
pub const NO_FRICTION_MESSAGE: &str = "No friction detected: no points of semantic ambiguity were found. The site appears to be LLM-friendly.";

/// Terminal message for a scan that found nothing because the page builds
/// its DOM client-side; static analysis only ever sees the empty shell.
pub const LIKELY_SPA_MESSAGE: &str = "SPA detected: this application builds its DOM with client-side JavaScript. Static analysis only receives the initial, empty HTML and cannot inspect the rendered components. Try a static-content site for complete results.";

/// One scanning session: the point collection, the status flags, and the
/// pipeline that fills them.
///
/// States move `Idle -> Scanning -> Idle`, with the terminal idle state
/// distinguished only by whether [`scan_error`](Self::scan_error) is set.
pub struct ScanSession {
    config: Config,
    client: reqwest::Client,
    is_scanning: bool,
    scan_error: Option<String>,
    scanned_url: Option<String>,
    points: Vec<FrictionPoint>,
}

impl ScanSession {
    /// Creates an idle session.
    ///
    /// The client should come from
    /// [`init_http_client`](crate::initialization::init_http_client) so the
    /// configured timeout bounds every fetch.
    pub fn new(config: Config, client: reqwest::Client) -> Self {
        Self {
            config,
            client,
            is_scanning: false,
            scan_error: None,
            scanned_url: None,
            points: Vec::new(),
        }
    }

    /// True strictly between scan start and scan completion.
    pub fn is_scanning(&self) -> bool {
        self.is_scanning
    }

    /// Terminal outcome message of the last scan. Set only when the scan
    /// completed with zero points or failed at the fetch step.
    pub fn scan_error(&self) -> Option<&str> {
        self.scan_error.as_deref()
    }

    /// The most recently requested target, retained after errors for
    /// display and debugging.
    pub fn scanned_url(&self) -> Option<&str> {
        self.scanned_url.as_deref()
    }

    /// The detected friction points, in rule order then document order.
    pub fn points(&self) -> &[FrictionPoint] {
        &self.points
    }

    /// Derived per-status counts over the current point collection.
    pub fn stats(&self) -> SessionStats {
        SessionStats::from_points(&self.points)
    }

    /// Runs one full scan against `url`, replacing any previous results.
    ///
    /// Empty or invalid input leaves the session untouched, as does calling
    /// while a scan is already in flight. Every path that gets past those
    /// guards clears the previous results before any I/O and releases
    /// `is_scanning` as its final action, whatever the outcome.
    pub async fn start_scan(&mut self, url: &str) {
        if self.is_scanning {
            warn!("Rejecting scan of {url}: a scan is already in flight");
            return;
        }
        let Some(target) = normalize_scan_url(url) else {
            return;
        };

        self.scan_error = None;
        self.points.clear();
        self.scanned_url = Some(target.clone());
        self.is_scanning = true;

        match self.run_pipeline(&target).await {
            Ok((points, _)) if !points.is_empty() => {
                info!("Scan of {target} found {} friction point(s)", points.len());
                self.points = points;
            }
            Ok((_, raw_html)) => {
                self.scan_error = Some(
                    if spa::is_likely_spa(&raw_html) {
                        LIKELY_SPA_MESSAGE
                    } else {
                        NO_FRICTION_MESSAGE
                    }
                    .to_string(),
                );
            }
            Err(e) => {
                warn!("Scan of {target} failed: {e}");
                self.scan_error = Some(e.to_string());
            }
        }

        self.is_scanning = false;
    }

    /// Fetch -> parse -> rule battery. The only suspension point is the
    /// fetch; parsing and detection are synchronous.
    async fn run_pipeline(
        &self,
        target: &str,
    ) -> Result<(Vec<FrictionPoint>, String), ScanError> {
        let raw_html =
            fetch::fetch_via_proxy(&self.client, &self.config.proxy_endpoint, target).await?;
        let document = parse::parse_document(&raw_html);
        let mut ids = PointIdGenerator::new();
        let points = rules::detect_friction(&document, &mut ids);
        Ok((points, raw_html))
    }

    /// Applies an operator decision to the point with the given id.
    ///
    /// Unknown ids are a no-op rather than an error: the operator may be
    /// acting on a stale reference from a superseded scan. A supplied
    /// response replaces the stored one; `None` preserves whatever was
    /// recorded before, even when the status moves away from answered.
    /// Points are never reordered or duplicated.
    pub fn update_point_status(
        &mut self,
        id: &str,
        status: FrictionStatus,
        response: Option<&str>,
    ) {
        if let Some(point) = self.points.iter_mut().find(|p| p.id == id) {
            point.status = status;
            if let Some(response) = response {
                point.user_response = Some(response.to_string());
            }
        }
    }
}
