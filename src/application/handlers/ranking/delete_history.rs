//! DeleteHistoryHandler - Command handler for soft-deleting history records.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::HistoryId;
use crate::domain::history::HistoryError;
use crate::ports::HistoryRepository;

/// Command to soft-delete a history record.
#[derive(Debug, Clone)]
pub struct DeleteHistoryCommand {
    pub id: HistoryId,
}

/// Handler for deleting history records.
pub struct DeleteHistoryHandler {
    repository: Arc<dyn HistoryRepository>,
}

impl DeleteHistoryHandler {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteHistoryCommand) -> Result<(), HistoryError> {
        // 1. Load (deleted records are invisible, so they read as missing)
        let mut record = self
            .repository
            .find_by_id(cmd.id)
            .await?
            .ok_or_else(|| HistoryError::not_found(cmd.id))?;

        // 2. Transition
        record.soft_delete()?;

        // 3. Persist
        self.repository.soft_delete(cmd.id).await?;

        info!(history_id = %cmd.id, "AHP history deleted");
        Ok(())
    }
}
