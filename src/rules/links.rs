//! Unlabeled interactive link detection.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::dom::{build_selector, has_attr, has_visible_text, opening_tag};
use crate::models::{FrictionPoint, FrictionStatus, FrictionType};
use crate::session::PointIdGenerator;

const LINK_SELECTOR_STR: &str = r#"a[href], [role="link"], [role="menuitem"]"#;

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(LINK_SELECTOR_STR).expect("Failed to parse link selector - this is a bug")
});

const INTENT_QUESTION: &str = "Where does this link navigate, or what action does it trigger? It has no text and no descriptive label.";

/// Flags navigation elements that expose neither text nor an `aria-label`.
/// Icon-only links are the usual offenders.
pub(super) fn detect(
    document: &Html,
    ids: &mut PointIdGenerator,
    points: &mut Vec<FrictionPoint>,
) {
    for element in document.select(&LINK_SELECTOR) {
        if !has_attr(element, "aria-label") && !has_visible_text(element) {
            points.push(FrictionPoint {
                id: ids.next_id(),
                kind: FrictionType::MissingAria,
                element_html: opening_tag(element),
                selector: build_selector(element),
                intent_question: INTENT_QUESTION.to_string(),
                status: FrictionStatus::Pending,
                user_response: None,
            });
        }
    }
}
