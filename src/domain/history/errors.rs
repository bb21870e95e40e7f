//! History-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, HistoryId, RequestId};

/// Errors surfaced by history operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// No visible record with this id.
    NotFound(HistoryId),
    /// The referenced request does not exist.
    ReferenceNotFound(RequestId),
    /// Request shape was rejected before computing.
    ValidationFailed { field: String, message: String },
    /// Operation not allowed in the record's current state.
    InvalidState(String),
    /// Storage or lookup failure.
    Infrastructure(String),
}

impl HistoryError {
    pub fn not_found(id: HistoryId) -> Self {
        HistoryError::NotFound(id)
    }
    pub fn reference_not_found(id: RequestId) -> Self {
        HistoryError::ReferenceNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        HistoryError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        HistoryError::InvalidState(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        HistoryError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            HistoryError::NotFound(_) => ErrorCode::HistoryNotFound,
            HistoryError::ReferenceNotFound(_) => ErrorCode::RequestNotFound,
            HistoryError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            HistoryError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            HistoryError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            HistoryError::NotFound(id) => format!("AHP history not found: {}", id),
            HistoryError::ReferenceNotFound(id) => format!("Request not found: {}", id),
            HistoryError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            HistoryError::InvalidState(msg) => format!("Invalid state: {}", msg),
            HistoryError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for HistoryError {}

impl From<DomainError> for HistoryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => HistoryError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::InvalidStateTransition => HistoryError::InvalidState(err.message),
            _ => HistoryError::Infrastructure(err.to_string()),
        }
    }
}
