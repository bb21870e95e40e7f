//! History repository port.
//!
//! Defines the contract for storing and reading AHP history records.
//!
//! # Design
//!
//! - **Append-only**: every `insert` creates a new record, even for
//!   identical input
//! - **Soft delete**: deleted records keep their data but disappear from
//!   every read on this port

use crate::domain::foundation::{DomainError, HistoryId};
use crate::domain::history::{HistoryDraft, HistoryRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Repository port for AHP history records.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Store a new record and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `SerializationError` if the record cannot be encoded
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, draft: HistoryDraft) -> Result<HistoryRecord, DomainError>;

    /// Find a visible record by id.
    ///
    /// Returns `None` if missing or soft-deleted.
    async fn find_by_id(&self, id: HistoryId) -> Result<Option<HistoryRecord>, DomainError>;

    /// List visible records, newest first.
    async fn list(&self, options: &ListOptions) -> Result<Vec<HistoryRecord>, DomainError>;

    /// Count visible records.
    async fn count(&self) -> Result<u64, DomainError>;

    /// Mark a record deleted without removing it.
    ///
    /// # Errors
    ///
    /// - `HistoryNotFound` if no visible record has this id
    /// - `DatabaseError` on persistence failure
    async fn soft_delete(&self, id: HistoryId) -> Result<(), DomainError>;
}

/// Paging for history listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Maximum number of results to return.
    pub limit: Option<u32>,

    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl ListOptions {
    /// Create options for a 1-based page.
    pub fn paginated(page: u32, per_page: u32) -> Self {
        Self {
            limit: Some(per_page),
            offset: Some(page.saturating_sub(1).saturating_mul(per_page)),
        }
    }

    pub fn offset_or_zero(&self) -> usize {
        self.offset.unwrap_or(0) as usize
    }
}
