//! friction_scan library: semantic friction detection for web pages.
//!
//! This library fetches a page's static markup through a cross-origin relay,
//! runs a battery of structural detection rules against it, and collects the
//! resulting "friction points" - elements whose purpose an automated
//! language-model consumer could not infer (unlabeled buttons, cryptic ids,
//! alt-less images, icon-only links). Operator answers about the points can
//! then be rendered into an `llms.txt` manifesto.
//!
//! # Example
//!
//! ```no_run
//! use friction_scan::initialization::init_http_client;
//! use friction_scan::{Config, FrictionStatus, ScanSession};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_http_client(&config)?;
//! let mut session = ScanSession::new(config, client);
//!
//! session.start_scan("example.com").await;
//!
//! if let Some(message) = session.scan_error() {
//!     println!("{message}");
//! }
//! for point in session.points() {
//!     println!("[{}] {} - {}", point.kind, point.selector, point.intent_question);
//! }
//! if let Some(first) = session.points().first().map(|p| p.id.clone()) {
//!     session.update_point_status(&first, FrictionStatus::Answered, Some("Submits the form"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Scanning requires a Tokio runtime; the only suspension point is the relay
//! fetch. The scanner sees static markup only - content injected by
//! client-side script execution is invisible to it, and a page that renders
//! that way is reported as a likely SPA instead of a clean result.

#![warn(missing_docs)]

mod dom;
mod fetch;
mod models;
mod parse;
mod rules;
mod session;
mod spa;

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;

// Re-export public API
pub use config::Config;
pub use models::{FrictionPoint, FrictionStatus, FrictionType};
pub use session::{
    ScanSession, SessionStats, LIKELY_SPA_MESSAGE, NO_FRICTION_MESSAGE,
};
