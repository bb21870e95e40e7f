//! ListHistoryHandler - Query handler for paged history listings.

use std::sync::Arc;

use crate::domain::history::HistoryError;
use crate::ports::{HistoryRepository, ListOptions, RequestReader};

use super::HistoryDetail;

/// Default page size when the caller gives none.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Upper bound on page size.
pub const MAX_PER_PAGE: u32 = 100;

/// Query for one page of visible history records.
#[derive(Debug, Clone)]
pub struct ListHistoryQuery {
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListHistoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of records plus the total visible count.
#[derive(Debug, Clone)]
pub struct HistoryPage {
    pub items: Vec<HistoryDetail>,
    pub total: u64,
}

/// Handler for listing history records.
pub struct ListHistoryHandler {
    repository: Arc<dyn HistoryRepository>,
    requests: Arc<dyn RequestReader>,
}

impl ListHistoryHandler {
    pub fn new(repository: Arc<dyn HistoryRepository>, requests: Arc<dyn RequestReader>) -> Self {
        Self {
            repository,
            requests,
        }
    }

    /// Lists newest first. A record whose reference request has vanished
    /// fails the whole listing.
    pub async fn handle(&self, query: ListHistoryQuery) -> Result<HistoryPage, HistoryError> {
        let per_page = query.per_page.clamp(1, MAX_PER_PAGE);
        let options = ListOptions::paginated(query.page.max(1), per_page);

        let records = self.repository.list(&options).await?;
        let total = self.repository.count().await?;

        let mut items = Vec::with_capacity(records.len());
        for record in records {
            let reference = self
                .requests
                .find_by_id(record.reference_request())
                .await?
                .ok_or_else(|| HistoryError::reference_not_found(record.reference_request()))?;
            items.push(HistoryDetail { record, reference });
        }

        Ok(HistoryPage { items, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::ranking::mocks::{MockHistoryRepository, MockRequestReader};
    use crate::domain::foundation::HistoryId;
    use crate::domain::history::fixtures::record;
    use crate::domain::request::fixtures::request;

    fn reader() -> Arc<MockRequestReader> {
        Arc::new(MockRequestReader::with_requests(vec![request(1, "Seminar", 3, 1, 10)]))
    }

    #[tokio::test]
    async fn lists_visible_records_newest_first() {
        let mut deleted = record(2);
        deleted.soft_delete().unwrap();
        let repo = Arc::new(MockHistoryRepository::with_records(vec![record(1), deleted, record(3)]));

        let page = ListHistoryHandler::new(repo, reader())
            .handle(ListHistoryQuery::default())
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        let ids: Vec<i64> = page.items.iter().map(|d| d.record.id().value()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(page.items[0].reference.event_name, "Seminar");
    }

    #[tokio::test]
    async fn pages_through_results() {
        let repo = Arc::new(MockHistoryRepository::with_records(
            (1..=5).map(record).collect(),
        ));

        let page = ListHistoryHandler::new(repo, reader())
            .handle(ListHistoryQuery { page: 2, per_page: 2 })
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        let ids: Vec<HistoryId> = page.items.iter().map(|d| d.record.id()).collect();
        assert_eq!(ids, vec![HistoryId::new(3).unwrap(), HistoryId::new(2).unwrap()]);
    }

    #[tokio::test]
    async fn zero_page_size_is_clamped() {
        let repo = Arc::new(MockHistoryRepository::with_records(vec![record(1), record(2)]));

        let page = ListHistoryHandler::new(repo, reader())
            .handle(ListHistoryQuery { page: 0, per_page: 0 })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn missing_reference_fails_listing() {
        let repo = Arc::new(MockHistoryRepository::with_records(vec![record(1)]));

        let result = ListHistoryHandler::new(repo, Arc::new(MockRequestReader::empty()))
            .handle(ListHistoryQuery::default())
            .await;

        assert!(matches!(result, Err(HistoryError::ReferenceNotFound(_))));
    }
}
