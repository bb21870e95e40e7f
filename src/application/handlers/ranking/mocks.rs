//! In-process port doubles shared by the ranking handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, HistoryId, RequestId};
use crate::domain::history::{HistoryDraft, HistoryRecord};
use crate::domain::request::RequestDetail;
use crate::ports::{HistoryRepository, ListOptions, RequestReader};

pub struct MockHistoryRepository {
    records: Mutex<Vec<HistoryRecord>>,
    fail_writes: bool,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn with_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_writes: false,
        }
    }

    pub fn all(&self) -> Vec<HistoryRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn insert(&self, draft: HistoryDraft) -> Result<HistoryRecord, DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(ErrorCode::DatabaseError, "insert failed"));
        }
        let mut records = self.records.lock().unwrap();
        let id = HistoryId::new(records.len() as i64 + 1).unwrap();
        let record = HistoryRecord::from_draft(id, draft);
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: HistoryId) -> Result<Option<HistoryRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id && r.is_visible())
            .cloned())
    }

    async fn list(&self, options: &ListOptions) -> Result<Vec<HistoryRecord>, DomainError> {
        let records = self.records.lock().unwrap();
        let mut visible: Vec<HistoryRecord> =
            records.iter().filter(|r| r.is_visible()).cloned().collect();
        visible.reverse();
        let limit = options.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(visible
            .into_iter()
            .skip(options.offset_or_zero())
            .take(limit)
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_visible())
            .count() as u64)
    }

    async fn soft_delete(&self, id: HistoryId) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(ErrorCode::DatabaseError, "update failed"));
        }
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id() == id && r.is_visible()) {
            Some(record) => record.soft_delete(),
            None => Err(DomainError::new(ErrorCode::HistoryNotFound, "not found")),
        }
    }
}

pub struct MockRequestReader {
    requests: Vec<RequestDetail>,
}

impl MockRequestReader {
    pub fn with_requests(requests: Vec<RequestDetail>) -> Self {
        Self { requests }
    }

    pub fn empty() -> Self {
        Self { requests: vec![] }
    }
}

#[async_trait]
impl RequestReader for MockRequestReader {
    async fn find_by_id(&self, id: RequestId) -> Result<Option<RequestDetail>, DomainError> {
        Ok(self.requests.iter().find(|r| r.id == id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<RequestDetail>, DomainError> {
        Ok(self.requests.clone())
    }
}
