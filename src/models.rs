//! Core data types for friction detection.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// Category of semantic ambiguity, fixed by the rule that produced the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro)]
#[serde(rename_all = "kebab-case")]
pub enum FrictionType {
    /// Interactive element with no accessible label and no text.
    MissingAria,
    /// Element id that looks machine-generated.
    CrypticId,
    /// Form field with no associated label.
    NoLabel,
    /// Button with no discernible purpose.
    AmbiguousButton,
    /// Image with a missing or blank `alt` attribute.
    EmptyAlt,
}

impl FrictionType {
    /// Wire name of the type, as it appears in serialized points.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrictionType::MissingAria => "missing-aria",
            FrictionType::CrypticId => "cryptic-id",
            FrictionType::NoLabel => "no-label",
            FrictionType::AmbiguousButton => "ambiguous-button",
            FrictionType::EmptyAlt => "empty-alt",
        }
    }
}

impl std::fmt::Display for FrictionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a friction point.
///
/// Every point starts out `Pending`; all transitions after that are
/// operator-driven. No automatic process ever reverts a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro)]
#[serde(rename_all = "kebab-case")]
pub enum FrictionStatus {
    /// Detected, awaiting an operator decision.
    Pending,
    /// The operator supplied a semantic explanation.
    Answered,
    /// The operator dismissed the point as a false positive.
    Ignored,
    /// The operator flagged the point as an unresolvable blind spot.
    Critical,
}

impl FrictionStatus {
    /// Wire name of the status, as it appears in serialized points.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrictionStatus::Pending => "pending",
            FrictionStatus::Answered => "answered",
            FrictionStatus::Ignored => "ignored",
            FrictionStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for FrictionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected ambiguity in a scanned page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrictionPoint {
    /// Session-unique identifier, generated at detection time, never reused.
    pub id: String,
    /// Which rule produced the point.
    #[serde(rename = "type")]
    pub kind: FrictionType,
    /// The element's opening tag only, attributes included. Children and
    /// text are excluded to keep the payload bounded for nested matches.
    pub element_html: String,
    /// Best-effort CSS-like locator. Not guaranteed unique in the document.
    pub selector: String,
    /// Natural-language prompt for the human operator (or an LLM) to answer.
    pub intent_question: String,
    /// Lifecycle state, operator-driven after detection.
    pub status: FrictionStatus,
    /// Operator-supplied explanation. Set when answered and preserved even
    /// if the status later moves elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_response: Option<String>,
}
