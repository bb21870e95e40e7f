//! In-memory implementation of HistoryRepository.
//!
//! Records are kept in their row shape and decoded on every read, so the
//! same encode/decode path as the PostgreSQL adapter is exercised.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, HistoryId};
use crate::domain::history::{HistoryDraft, HistoryRecord, HistoryRow};
use crate::ports::{HistoryRepository, ListOptions};

#[derive(Default)]
struct Table {
    rows: Vec<HistoryRow>,
    next_id: i64,
}

/// In-memory history store.
#[derive(Default)]
pub struct InMemoryHistoryRepository {
    table: RwLock<Table>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, deleted ones included.
    pub async fn row_count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn insert(&self, draft: HistoryDraft) -> Result<HistoryRecord, DomainError> {
        let row = HistoryRow::encode(&draft)?;

        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = HistoryId::new(table.next_id)?;
        table.rows.push(row.with_id(id.value()));

        Ok(HistoryRecord::from_draft(id, draft))
    }

    async fn find_by_id(&self, id: HistoryId) -> Result<Option<HistoryRecord>, DomainError> {
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|row| row.id == id.value() && !row.is_delete)
            .cloned()
            .map(HistoryRow::decode)
            .transpose()
    }

    async fn list(&self, options: &ListOptions) -> Result<Vec<HistoryRecord>, DomainError> {
        let table = self.table.read().await;
        let mut visible: Vec<&HistoryRow> = table.rows.iter().filter(|row| !row.is_delete).collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let limit = options.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        visible
            .into_iter()
            .skip(options.offset_or_zero())
            .take(limit)
            .cloned()
            .map(HistoryRow::decode)
            .collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().filter(|row| !row.is_delete).count() as u64)
    }

    async fn soft_delete(&self, id: HistoryId) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id.value() && !row.is_delete)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::HistoryNotFound,
                    format!("AHP history not found: {}", id),
                )
            })?;
        row.is_delete = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RequestId;
    use crate::domain::history::fixtures::draft;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = InMemoryHistoryRepository::new();

        let first = repo.insert(draft(1)).await.unwrap();
        let second = repo.insert(draft(1)).await.unwrap();

        assert_eq!(first.id().value(), 1);
        assert_eq!(second.id().value(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn find_round_trips_through_row_shape() {
        let repo = InMemoryHistoryRepository::new();
        let stored = repo.insert(draft(5)).await.unwrap();

        let found = repo.find_by_id(stored.id()).await.unwrap().unwrap();

        assert_eq!(found.reference_request(), RequestId::new(5));
        assert_eq!(found.alternatives(), stored.alternatives());
        assert_eq!(found.ranking(), stored.ranking());
    }

    #[tokio::test]
    async fn soft_delete_hides_but_keeps_row() {
        let repo = InMemoryHistoryRepository::new();
        let stored = repo.insert(draft(1)).await.unwrap();

        repo.soft_delete(stored.id()).await.unwrap();

        assert!(repo.find_by_id(stored.id()).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.row_count().await, 1);
    }

    #[tokio::test]
    async fn soft_delete_twice_is_not_found() {
        let repo = InMemoryHistoryRepository::new();
        let stored = repo.insert(draft(1)).await.unwrap();
        repo.soft_delete(stored.id()).await.unwrap();

        let err = repo.soft_delete(stored.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::HistoryNotFound);
    }

    #[tokio::test]
    async fn list_is_newest_first_and_paged() {
        let repo = InMemoryHistoryRepository::new();
        for _ in 0..3 {
            repo.insert(draft(1)).await.unwrap();
        }

        let all = repo.list(&ListOptions::default()).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let page = repo.list(&ListOptions::paginated(2, 2)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id().value(), 1);
    }
}
