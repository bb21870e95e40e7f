//! GetHistoryHandler - Query handler for one stored computation.

use std::sync::Arc;

use crate::domain::foundation::HistoryId;
use crate::domain::history::{HistoryError, HistoryRecord};
use crate::domain::request::RequestDetail;
use crate::ports::{HistoryRepository, RequestReader};

/// Query to get a history record by ID.
#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub id: HistoryId,
}

/// A record together with the request it was computed for.
#[derive(Debug, Clone)]
pub struct HistoryDetail {
    pub record: HistoryRecord,
    pub reference: RequestDetail,
}

/// Handler for retrieving history details.
pub struct GetHistoryHandler {
    repository: Arc<dyn HistoryRepository>,
    requests: Arc<dyn RequestReader>,
}

impl GetHistoryHandler {
    pub fn new(repository: Arc<dyn HistoryRepository>, requests: Arc<dyn RequestReader>) -> Self {
        Self {
            repository,
            requests,
        }
    }

    pub async fn handle(&self, query: GetHistoryQuery) -> Result<HistoryDetail, HistoryError> {
        let record = self
            .repository
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| HistoryError::not_found(query.id))?;

        let reference = self
            .requests
            .find_by_id(record.reference_request())
            .await?
            .ok_or_else(|| HistoryError::reference_not_found(record.reference_request()))?;

        Ok(HistoryDetail { record, reference })
    }
}
