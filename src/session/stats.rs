//! Derived session statistics.
//!
//! Plain derivation over the point collection, computed on demand. Nothing
//! here is cached or kept in sync; callers recompute when they need fresh
//! numbers.

use serde::Serialize;

use crate::models::{FrictionPoint, FrictionStatus};

/// Per-status counts over a point collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Number of points in the collection.
    pub total: usize,
    /// Points awaiting an operator decision.
    pub pending: usize,
    /// Points the operator explained.
    pub answered: usize,
    /// Points flagged as unresolvable blind spots.
    pub critical: usize,
    /// Points dismissed as false positives.
    pub ignored: usize,
}

impl SessionStats {
    /// Counts the collection by status.
    pub fn from_points(points: &[FrictionPoint]) -> Self {
        let count =
            |status: FrictionStatus| points.iter().filter(|p| p.status == status).count();

        Self {
            total: points.len(),
            pending: count(FrictionStatus::Pending),
            answered: count(FrictionStatus::Answered),
            critical: count(FrictionStatus::Critical),
            ignored: count(FrictionStatus::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FrictionType;

    fn point_with_status(id: &str, status: FrictionStatus) -> FrictionPoint {
        FrictionPoint {
            id: id.to_string(),
            kind: FrictionType::EmptyAlt,
            element_html: "<img>".to_string(),
            selector: "img".to_string(),
            intent_question: "What information does this image convey?".to_string(),
            status,
            user_response: None,
        }
    }

    #[test]
    fn test_empty_collection_yields_zeroes() {
        let stats = SessionStats::from_points(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.answered, 0);
        assert_eq!(stats.critical, 0);
        assert_eq!(stats.ignored, 0);
    }

    #[test]
    fn test_counts_by_status() {
        let points = vec![
            point_with_status("a", FrictionStatus::Pending),
            point_with_status("b", FrictionStatus::Pending),
            point_with_status("c", FrictionStatus::Answered),
            point_with_status("d", FrictionStatus::Critical),
            point_with_status("e", FrictionStatus::Ignored),
        ];

        let stats = SessionStats::from_points(&points);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.answered, 1);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.ignored, 1);
    }
}
