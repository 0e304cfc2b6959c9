//! Machine-generated identifier detection.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::dom::opening_tag;
use crate::models::{FrictionPoint, FrictionStatus, FrictionType};
use crate::session::PointIdGenerator;

const ID_SELECTOR_STR: &str = "[id]";

static ID_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ID_SELECTOR_STR).expect("Failed to parse id selector - this is a bug")
});

/// An id looks machine-generated when it is either a long unbroken
/// alphanumeric run (six or more characters, no separators) or a known
/// framework counter prefix followed by digits.
const CRYPTIC_ID_PATTERN: &str = r"(?i)^[a-z0-9]{6,}$|^(?:comp|ng|_|el|div|cmp)\d+";

static CRYPTIC_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CRYPTIC_ID_PATTERN).expect("Failed to compile cryptic id pattern - this is a bug")
});

/// Flags elements whose `id` carries no human meaning. The id itself is the
/// locator here, so the selector is always `#id` rather than the class-based
/// fallback.
pub(super) fn detect(
    document: &Html,
    ids: &mut PointIdGenerator,
    points: &mut Vec<FrictionPoint>,
) {
    for element in document.select(&ID_SELECTOR) {
        let Some(id) = element.value().attr("id") else {
            continue;
        };

        if CRYPTIC_ID_RE.is_match(id) {
            points.push(FrictionPoint {
                id: ids.next_id(),
                kind: FrictionType::CrypticId,
                element_html: opening_tag(element),
                selector: format!("#{id}"),
                intent_question: format!(
                    "The ID \"#{id}\" is semantically opaque. What content or section does this container represent in the application logic?"
                ),
                status: FrictionStatus::Pending,
                user_response: None,
            });
        }
    }
}
