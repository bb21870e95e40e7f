//! Read-side shape of a stored request.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RequestId, Timestamp};

use super::Alternative;

/// The user who filed a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub id: i64,
    pub name: String,
}

/// Event category; `priority` is the importance class used for ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub id: i64,
    pub name: String,
    pub priority: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStatus {
    pub id: i64,
    pub name: String,
}

/// A request as returned by the request store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDetail {
    pub id: RequestId,
    pub requester: Requester,
    pub event_name: String,
    pub event_location: String,
    pub event_start: Timestamp,
    pub event_end: Timestamp,
    pub description: String,
    pub event_type: EventType,
    pub status: RequestStatus,
    pub participants: u32,
    pub created_at: Timestamp,
}

impl RequestDetail {
    /// Projects the fields the ranking reads. Complexity is supplied
    /// separately per listing, so it starts unset.
    pub fn to_alternative(&self) -> Alternative {
        Alternative::new(self.id, self.event_name.clone(), self.created_at, self.event_start)
            .with_priority_class(self.event_type.priority)
            .with_participants(self.participants)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::request;

    #[test]
    fn to_alternative_copies_ranking_fields() {
        let detail = request(4, "Workshop", 7, 2, 35);
        let alternative = detail.to_alternative();

        assert_eq!(alternative.id, detail.id);
        assert_eq!(alternative.name, "Workshop");
        assert_eq!(alternative.priority_class, 2);
        assert_eq!(alternative.participants, 35);
        assert_eq!(alternative.event_start, detail.event_start);
        assert!(alternative.complexity.is_none());
    }
}
