//! Client-side-rendering heuristic.
//!
//! A page that ships an empty shell and builds its DOM with JavaScript
//! produces zero friction points for the wrong reason. The signals below are
//! matched against the raw markup, not the parsed tree, so framework markers
//! survive whatever the parser's error recovery rewrites.

use std::sync::LazyLock;

use regex::RegexSet;

const SPA_SIGNAL_PATTERNS: &[&str] = &[
    r"(?i)<app-root",             // Angular root element
    r#"(?i)<div id="root""#,      // React / Vue mount point
    r#"(?i)<div id="app""#,       // Vue mount point
    r"(?i)ng-version=",           // Angular version marker
    r"(?i)data-reactroot",        // React legacy SSR flag
    r"(?i)/__nuxt",               // Nuxt.js asset path
    r"(?i)window\.__NEXT_DATA__", // Next.js bootstrap object
];

static SPA_SIGNALS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(SPA_SIGNAL_PATTERNS)
        .expect("Failed to compile SPA signal patterns - this is a bug")
});

/// Returns true when the raw markup carries any known client-side-rendering
/// marker. A single signal is enough.
///
/// Only consulted when the rule battery found nothing, to pick between the
/// two terminal messages; a positive result never suppresses detected points.
pub fn is_likely_spa(raw_html: &str) -> bool {
    SPA_SIGNALS.is_match(raw_html)
}
