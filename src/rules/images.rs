//! Missing image description detection.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::dom::{build_selector, opening_tag};
use crate::models::{FrictionPoint, FrictionStatus, FrictionType};
use crate::session::PointIdGenerator;

const IMG_SELECTOR_STR: &str = "img";

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(IMG_SELECTOR_STR).expect("Failed to parse img selector - this is a bug")
});

const INTENT_QUESTION: &str = "What information does this image convey? Is it decorative, or does it carry data the surrounding context depends on?";

/// Flags images whose `alt` attribute is absent or blank after trimming.
/// A whitespace-only `alt` hides the image from an automated consumer just
/// as thoroughly as a missing one, so both forms are treated identically.
pub(super) fn detect(
    document: &Html,
    ids: &mut PointIdGenerator,
    points: &mut Vec<FrictionPoint>,
) {
    for element in document.select(&IMG_SELECTOR) {
        let alt_missing = element
            .value()
            .attr("alt")
            .is_none_or(|alt| alt.trim().is_empty());

        if alt_missing {
            points.push(FrictionPoint {
                id: ids.next_id(),
                kind: FrictionType::EmptyAlt,
                element_html: opening_tag(element),
                selector: build_selector(element),
                intent_question: INTENT_QUESTION.to_string(),
                status: FrictionStatus::Pending,
                user_response: None,
            });
        }
    }
}
