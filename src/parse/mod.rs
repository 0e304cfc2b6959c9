//! Markup parsing.
//!
//! The single entry point turns a raw markup string into a query-able
//! document tree. All querying happens in the rule modules via CSS
//! selectors; this module owns no extraction logic of its own.

use scraper::Html;

/// Parses raw markup into a navigable document tree.
///
/// Pure function: no network, no global state. Malformed or partial input
/// never fails - html5ever applies standard error recovery (unclosed tags,
/// implicit `<html>`/`<body>` wrapping) and yields the recovered tree.
pub fn parse_document(raw_html: &str) -> Html {
    Html::parse_document(raw_html)
}
