//! Element-level helpers shared by the detection rules.

use scraper::ElementRef;

/// Returns the element's opening tag only, attributes included.
///
/// A match deep inside a large subtree must not drag its entire inner HTML
/// into the point record, so everything past the first `>` is dropped.
pub fn opening_tag(element: ElementRef<'_>) -> String {
    let outer = element.html();
    match outer.split_once('>') {
        Some((head, _)) => format!("{head}>"),
        None => outer,
    }
}

/// Builds a short, best-effort CSS-like locator for an element.
///
/// Prefers `#id`; otherwise the tag name plus up to the first two class
/// names as listed on the element. Not guaranteed unique in the document.
pub fn build_selector(element: ElementRef<'_>) -> String {
    if let Some(id) = element.value().id() {
        if !id.is_empty() {
            return format!("#{id}");
        }
    }

    let tag = element.value().name();
    // Read the raw attribute rather than Element::classes() so the first
    // two classes keep their attribute order.
    let classes = element
        .value()
        .attr("class")
        .map(|value| {
            value
                .split_whitespace()
                .take(2)
                .collect::<Vec<_>>()
                .join(".")
        })
        .unwrap_or_default();

    if classes.is_empty() {
        tag.to_string()
    } else {
        format!("{tag}.{classes}")
    }
}

/// True when the element has any non-whitespace text content, nested
/// children included.
pub fn has_visible_text(element: ElementRef<'_>) -> bool {
    element.text().any(|chunk| !chunk.trim().is_empty())
}

/// True when the attribute is present with a non-empty value.
pub fn has_attr(element: ElementRef<'_>, name: &str) -> bool {
    element
        .value()
        .attr(name)
        .is_some_and(|value| !value.is_empty())
}
