//! Complexity ratings supplied alongside a live listing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{RequestId, ValidationError};

/// Integer rating from 1 (simple) to 5 (very complex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ComplexityRating(u8);

impl ComplexityRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a rating, rejecting anything outside 1..=5.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "complexity",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ComplexityRating {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i64> for ComplexityRating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ComplexityRating> for i64 {
    fn from(rating: ComplexityRating) -> Self {
        i64::from(rating.0)
    }
}

/// Parses a JSON array of `{id, event_name, complexity}` assessments.
///
/// Parsing is lenient: malformed JSON yields an empty map, and entries with a
/// missing id or a complexity that is not an integer in 1..=5 are skipped.
/// A later entry for the same id wins.
pub fn parse_assessments(raw: &str) -> HashMap<RequestId, ComplexityRating> {
    let mut out = HashMap::new();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return out;
    }

    let Ok(entries) = serde_json::from_str::<Vec<serde_json::Value>>(trimmed) else {
        return out;
    };

    for entry in entries {
        let Some(id) = entry.get("id").and_then(serde_json::Value::as_i64) else {
            continue;
        };
        let Some(complexity) = entry.get("complexity").and_then(serde_json::Value::as_f64) else {
            continue;
        };
        if complexity.fract() != 0.0 {
            continue;
        }
        if let Ok(rating) = ComplexityRating::try_new(complexity as i64) {
            out.insert(RequestId::new(id), rating);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_through_five() {
        for v in 1..=5 {
            assert_eq!(ComplexityRating::try_new(v).unwrap().value() as i64, v);
        }
        assert!(ComplexityRating::try_new(0).is_err());
        assert!(ComplexityRating::try_new(6).is_err());
    }

    #[test]
    fn default_is_one() {
        assert_eq!(ComplexityRating::default().value(), 1);
    }

    #[test]
    fn parses_assessment_array() {
        let raw = r#"[
            {"id": 3, "event_name": "Seminar", "complexity": 4},
            {"id": 8, "event_name": "Concert", "complexity": 2.0}
        ]"#;
        let map = parse_assessments(raw);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&RequestId::new(3)].value(), 4);
        assert_eq!(map[&RequestId::new(8)].value(), 2);
    }

    #[test]
    fn skips_invalid_entries() {
        let raw = r#"[
            {"id": 1, "complexity": 9},
            {"id": 2, "complexity": 2.5},
            {"event_name": "no id", "complexity": 3},
            {"id": 4, "complexity": "high"},
            {"id": 5, "complexity": 3}
        ]"#;
        let map = parse_assessments(raw);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&RequestId::new(5)].value(), 3);
    }

    #[test]
    fn malformed_json_yields_empty_map() {
        assert!(parse_assessments("").is_empty());
        assert!(parse_assessments("not json").is_empty());
        assert!(parse_assessments(r#"{"id": 1}"#).is_empty());
    }

    #[test]
    fn deserializes_with_range_check() {
        let ok: ComplexityRating = serde_json::from_str("3").unwrap();
        assert_eq!(ok.value(), 3);
        assert!(serde_json::from_str::<ComplexityRating>("7").is_err());
    }
}
