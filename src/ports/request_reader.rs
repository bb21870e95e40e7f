//! Request reader port.
//!
//! Requests are owned by the wider request-tracking application. The ranker
//! only needs to look one up and to list the active ones.

use crate::domain::foundation::{DomainError, RequestId};
use crate::domain::request::RequestDetail;
use async_trait::async_trait;

/// Read-only access to stored requests.
#[async_trait]
pub trait RequestReader: Send + Sync {
    /// Get a request by id.
    ///
    /// Returns `None` if it does not exist, so callers can report a typed
    /// not-found.
    async fn find_by_id(&self, id: RequestId) -> Result<Option<RequestDetail>, DomainError>;

    /// List requests that are not deleted, in the store's natural order.
    async fn list_active(&self) -> Result<Vec<RequestDetail>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn RequestReader) {}
    }
}
