//! Strongly-typed identifier value objects.
//!
//! Identifiers are assigned by the persistence collaborator (auto-increment
//! keys), so they wrap a plain `i64` rather than a generated UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a stored AHP history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(i64);

impl HistoryId {
    /// Creates a HistoryId, rejecting non-positive values.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::invalid_format(
                "history_id",
                "must be a positive integer",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw key.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HistoryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Identifier of a building-use request (the alternative being ranked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(i64);

impl RequestId {
    /// Creates a RequestId from a raw key.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw key.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_id_rejects_zero_and_negative() {
        assert!(HistoryId::new(0).is_err());
        assert!(HistoryId::new(-4).is_err());
        assert_eq!(HistoryId::new(7).unwrap().value(), 7);
    }

    #[test]
    fn history_id_parses_from_path_segment() {
        let id: HistoryId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert!("abc".parse::<HistoryId>().is_err());
    }

    #[test]
    fn request_id_displays_raw_value() {
        assert_eq!(RequestId::new(15).to_string(), "15");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&RequestId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: HistoryId = serde_json::from_str("9").unwrap();
        assert_eq!(id.value(), 9);
    }
}
