//! In-memory implementation of RequestReader.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RequestId};
use crate::domain::request::RequestDetail;
use crate::ports::RequestReader;

/// Request store backed by a vector, kept in insertion order.
#[derive(Default)]
pub struct InMemoryRequestReader {
    requests: RwLock<Vec<RequestDetail>>,
}

impl InMemoryRequestReader {
    pub fn new(requests: Vec<RequestDetail>) -> Self {
        Self {
            requests: RwLock::new(requests),
        }
    }

    /// Adds or replaces a request.
    pub async fn upsert(&self, request: RequestDetail) {
        let mut requests = self.requests.write().await;
        match requests.iter_mut().find(|r| r.id == request.id) {
            Some(existing) => *existing = request,
            None => requests.push(request),
        }
    }
}

#[async_trait]
impl RequestReader for InMemoryRequestReader {
    async fn find_by_id(&self, id: RequestId) -> Result<Option<RequestDetail>, DomainError> {
        Ok(self
            .requests
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_active(&self) -> Result<Vec<RequestDetail>, DomainError> {
        Ok(self.requests.read().await.clone())
    }
}
