//! Visibility of a stored history record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a history record: visible until soft-deleted, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    #[default]
    Visible,
    Deleted,
}

impl HistoryStatus {
    pub fn is_visible(&self) -> bool {
        matches!(self, HistoryStatus::Visible)
    }

    /// Valid transitions:
    /// - Visible -> Deleted
    pub fn can_transition_to(&self, target: &HistoryStatus) -> bool {
        use HistoryStatus::*;
        matches!((self, target), (Visible, Deleted))
    }

    /// Maps the stored `is_delete` flag.
    pub fn from_deleted_flag(is_delete: bool) -> Self {
        if is_delete {
            HistoryStatus::Deleted
        } else {
            HistoryStatus::Visible
        }
    }
}

impl fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HistoryStatus::Visible => "Visible",
            HistoryStatus::Deleted => "Deleted",
        };
        write!(f, "{}", s)
    }
}
