//! Requests as ranking alternatives.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::AlternativeRef;
use crate::domain::foundation::{RequestId, Timestamp};

use super::ComplexityRating;

/// A building-use request, reduced to what the ranking reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: RequestId,
    pub name: String,
    pub created_at: Timestamp,
    pub event_start: Timestamp,
    /// Smaller is more important. Non-positive values rank as 1.
    pub priority_class: i32,
    pub participants: u32,
    pub complexity: Option<ComplexityRating>,
}

impl Alternative {
    /// Creates an alternative with priority class 1, no participants and no
    /// complexity rating.
    pub fn new(
        id: RequestId,
        name: impl Into<String>,
        created_at: Timestamp,
        event_start: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
            event_start,
            priority_class: 1,
            participants: 0,
            complexity: None,
        }
    }

    pub fn with_priority_class(mut self, priority_class: i32) -> Self {
        self.priority_class = priority_class;
        self
    }

    pub fn with_participants(mut self, participants: u32) -> Self {
        self.participants = participants;
        self
    }

    pub fn with_complexity(mut self, rating: ComplexityRating) -> Self {
        self.complexity = Some(rating);
        self
    }

    pub fn to_ref(&self) -> AlternativeRef {
        AlternativeRef::with_id(self.id, self.name.clone())
    }
}
