//! Error types and propagation policy.
//!
//! Failures from the fetch step are caught at the session boundary and
//! flattened into a single `scan_error` string; no structured error object
//! crosses into consumers. Nothing here is fatal to the process.

mod types;

// Re-export public API
pub use types::{InitializationError, ScanError};
