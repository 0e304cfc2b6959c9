//! Unlabeled form field detection.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::dom::{build_selector, has_attr, opening_tag};
use crate::models::{FrictionPoint, FrictionStatus, FrictionType};
use crate::session::PointIdGenerator;

const FIELD_SELECTOR_STR: &str = "input, textarea, select";
const LABEL_FOR_SELECTOR_STR: &str = "label[for]";

static FIELD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(FIELD_SELECTOR_STR).expect("Failed to parse field selector - this is a bug")
});

static LABEL_FOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(LABEL_FOR_SELECTOR_STR)
        .expect("Failed to parse label selector - this is a bug")
});

/// Flags form fields with no accessible name: no `aria-label`, no
/// `aria-labelledby`, and no `<label for>` anywhere in the document whose
/// target matches the field's `id`. A field without an `id` cannot be
/// reached by a label at all, so it only passes via the aria attributes.
pub(super) fn detect(
    document: &Html,
    ids: &mut PointIdGenerator,
    points: &mut Vec<FrictionPoint>,
) {
    // Index label targets up front so each field check is a set lookup
    // instead of another document traversal.
    let label_targets: HashSet<&str> = document
        .select(&LABEL_FOR_SELECTOR)
        .filter_map(|label| label.value().attr("for"))
        .filter(|target| !target.is_empty())
        .collect();

    for element in document.select(&FIELD_SELECTOR) {
        if has_attr(element, "aria-label") || has_attr(element, "aria-labelledby") {
            continue;
        }

        let has_linked_label = element
            .value()
            .attr("id")
            .filter(|id| !id.is_empty())
            .is_some_and(|id| label_targets.contains(id));
        if has_linked_label {
            continue;
        }

        let tag = element.value().name();
        points.push(FrictionPoint {
            id: ids.next_id(),
            kind: FrictionType::NoLabel,
            element_html: opening_tag(element),
            selector: build_selector(element),
            intent_question: format!(
                "What data does this {tag} field capture? What is its validation context?"
            ),
            status: FrictionStatus::Pending,
            user_response: None,
        });
    }
}
