//! llms.txt manifesto rendering.
//!
//! Turns the answered and critical friction points of a finished scan into
//! the plain-text document a site owner serves at `/llms.txt` for language
//! model consumers. Template-filling only; no scan behavior depends on this
//! module.

use crate::models::{FrictionPoint, FrictionStatus};

/// True when at least one point is answered or critical, i.e. the manifesto
/// would carry content beyond its boilerplate.
pub fn has_actionable_points(points: &[FrictionPoint]) -> bool {
    points.iter().any(|p| {
        matches!(
            p.status,
            FrictionStatus::Answered | FrictionStatus::Critical
        )
    })
}

/// Collapses whitespace runs so multi-line opening tags read as one line.
fn clean_html(element_html: &str) -> String {
    element_html.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders the manifesto from a finished scan's point collection.
///
/// Answered points become resolved semantic definitions; critical points
/// are listed as blind spots a model should treat with caution. Pending and
/// ignored points are omitted.
pub fn render_manifesto(points: &[FrictionPoint]) -> String {
    let answered: Vec<&FrictionPoint> = points
        .iter()
        .filter(|p| p.status == FrictionStatus::Answered)
        .collect();
    let critical: Vec<&FrictionPoint> = points
        .iter()
        .filter(|p| p.status == FrictionStatus::Critical)
        .collect();

    let mut output = String::from("# Semantic Manifesto (generated by friction_scan)\n");
    output.push_str(
        "> Instructions for the LLM: use this semantic map to understand the hidden intent of the interactive and dynamic elements of the DOM.\n\n",
    );

    if !answered.is_empty() {
        output.push_str("## 1. Resolved Semantic Definitions\n");
        for point in &answered {
            output.push_str(&format!("- Element: `{}`\n", clean_html(&point.element_html)));
            if let Some(response) = &point.user_response {
                output.push_str(&format!("  Business context: \"{response}\"\n\n"));
            }
        }
    }

    if !critical.is_empty() {
        output.push_str("## 2. Blind Spots and Restrictions (Critical)\n");
        output.push_str(
            "> Warning: the following elements lack context and should be treated with caution or ignored when generating actions.\n\n",
        );
        for point in &critical {
            output.push_str(&format!(
                "- Unknown element: `{}`\n",
                clean_html(&point.element_html)
            ));
            output.push_str(&format!(
                "  Detected uncertainty: {}\n\n",
                point.intent_question
            ));
        }
    }

    output.push_str(PLACEMENT_INSTRUCTIONS);
    output
}

const PLACEMENT_INSTRUCTIONS: &str = "\
### Serving this file

1. Place the file at the root of your domain so it is reachable at `https://your-domain/llms.txt`.
2. Keep it plain text, with a `.txt` extension.
3. Do not require authentication; search bots and AI agents must be able to read it.
4. Regenerate it after site changes so models always see current context.
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FrictionType;

    fn point(id: &str, status: FrictionStatus, response: Option<&str>) -> FrictionPoint {
        FrictionPoint {
            id: id.to_string(),
            kind: FrictionType::AmbiguousButton,
            element_html: "<button\n  class=\"btn\"\n  data-x=\"1\">".to_string(),
            selector: "button.btn".to_string(),
            intent_question: "What action does this button trigger?".to_string(),
            status,
            user_response: response.map(String::from),
        }
    }

    #[test]
    fn test_has_actionable_points() {
        assert!(!has_actionable_points(&[point(
            "a",
            FrictionStatus::Pending,
            None
        )]));
        assert!(!has_actionable_points(&[point(
            "a",
            FrictionStatus::Ignored,
            None
        )]));
        assert!(has_actionable_points(&[point(
            "a",
            FrictionStatus::Answered,
            Some("x")
        )]));
        assert!(has_actionable_points(&[point(
            "a",
            FrictionStatus::Critical,
            None
        )]));
    }

    #[test]
    fn test_answered_points_carry_their_responses() {
        let points = vec![point(
            "a",
            FrictionStatus::Answered,
            Some("Submits the checkout form"),
        )];
        let manifesto = render_manifesto(&points);

        assert!(manifesto.contains("## 1. Resolved Semantic Definitions"));
        assert!(manifesto.contains("\"Submits the checkout form\""));
        // Multi-line opening tags are collapsed to one line
        assert!(manifesto.contains("`<button class=\"btn\" data-x=\"1\">`"));
        assert!(!manifesto.contains("## 2."));
    }

    #[test]
    fn test_critical_points_carry_their_questions() {
        let points = vec![point("a", FrictionStatus::Critical, None)];
        let manifesto = render_manifesto(&points);

        assert!(manifesto.contains("## 2. Blind Spots and Restrictions (Critical)"));
        assert!(manifesto.contains("What action does this button trigger?"));
        assert!(!manifesto.contains("## 1."));
    }

    #[test]
    fn test_pending_and_ignored_points_are_omitted() {
        let points = vec![
            point("a", FrictionStatus::Pending, None),
            point("b", FrictionStatus::Ignored, Some("dismissed")),
        ];
        let manifesto = render_manifesto(&points);

        assert!(!manifesto.contains("## 1."));
        assert!(!manifesto.contains("## 2."));
        assert!(!manifesto.contains("dismissed"));
    }

    #[test]
    fn test_placement_instructions_are_always_appended() {
        let manifesto = render_manifesto(&[]);
        assert!(manifesto.contains("### Serving this file"));
        assert!(manifesto.contains("llms.txt"));
    }
}
