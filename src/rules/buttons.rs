//! Ambiguous button detection.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::dom::{build_selector, has_attr, has_visible_text, opening_tag};
use crate::models::{FrictionPoint, FrictionStatus, FrictionType};
use crate::session::PointIdGenerator;

const BUTTON_SELECTOR_STR: &str = r#"button, [role="button"]"#;

static BUTTON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(BUTTON_SELECTOR_STR).expect("Failed to parse button selector - this is a bug")
});

const INTENT_QUESTION: &str =
    "What action does this button trigger? What is its functional purpose in the user flow?";

/// Flags buttons that expose no purpose at all: no `aria-label`, no
/// non-whitespace text content, and no `title` attribute. Any one of the
/// three is enough to pass.
pub(super) fn detect(
    document: &Html,
    ids: &mut PointIdGenerator,
    points: &mut Vec<FrictionPoint>,
) {
    for element in document.select(&BUTTON_SELECTOR) {
        let has_label = has_attr(element, "aria-label");
        let has_title = has_attr(element, "title");

        if !has_label && !has_title && !has_visible_text(element) {
            points.push(FrictionPoint {
                id: ids.next_id(),
                kind: FrictionType::AmbiguousButton,
                element_html: opening_tag(element),
                selector: build_selector(element),
                intent_question: INTENT_QUESTION.to_string(),
                status: FrictionStatus::Pending,
                user_response: None,
            });
        }
    }
}
