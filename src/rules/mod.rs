//! Friction detection rules.
//!
//! Each rule scans the whole document once and emits one point per match.
//! Rules are independent and never exclude each other's matches: an element
//! that trips several rules yields several points. Declaration order in
//! [`detect_friction`] fixes the output order; within a rule, matches follow
//! document order, so the full output is deterministic for a given tree.
//!
//! The rules are deliberately simple structural checks rather than a scoring
//! model. Every finding has to be explainable to a non-technical operator,
//! and false positives are resolved by the operator marking the point
//! ignored, not by tuning the engine.

mod buttons;
mod fields;
mod identifiers;
mod images;
mod links;


use scraper::Html;

use crate::models::FrictionPoint;
use crate::session::PointIdGenerator;

/// Runs the full rule battery against a parsed document.
pub fn detect_friction(document: &Html, ids: &mut PointIdGenerator) -> Vec<FrictionPoint> {
    let mut points = Vec::new();

    buttons::detect(document, ids, &mut points);
    fields::detect(document, ids, &mut points);
    images::detect(document, ids, &mut points);
    identifiers::detect(document, ids, &mut points);
    links::detect(document, ids, &mut points);

    points
}
