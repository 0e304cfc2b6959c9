//! Output rendering for consumers of a finished scan.

mod manifesto;

// Re-export public API
pub use manifesto::{has_actionable_points, render_manifesto};
