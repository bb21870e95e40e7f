//! CreateHistoryHandler - Command handler for comparison-driven rankings.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ahp::{
    ComparisonInput, Criterion, MatrixBuilder, RankingObserver, RankingPipeline, RankingPolicy,
};
use crate::domain::foundation::RequestId;
use crate::domain::history::{HistoryDraft, HistoryError, HistoryRecord};
use crate::ports::{HistoryRepository, RequestReader};

/// Command to compute and store one AHP ranking.
#[derive(Debug, Clone)]
pub struct CreateHistoryCommand {
    pub input: ComparisonInput,
    pub reference_request: RequestId,
}

/// Result of a stored computation.
#[derive(Debug, Clone)]
pub struct CreateHistoryResult {
    pub record: HistoryRecord,
    /// Comparisons dropped because a label matched nothing.
    pub unmatched_comparisons: usize,
}

/// Handler for creating history records.
pub struct CreateHistoryHandler {
    repository: Arc<dyn HistoryRepository>,
    requests: Arc<dyn RequestReader>,
    policy: Arc<RankingPolicy>,
    observer: Arc<dyn RankingObserver>,
}

impl CreateHistoryHandler {
    pub fn new(
        repository: Arc<dyn HistoryRepository>,
        requests: Arc<dyn RequestReader>,
        policy: Arc<RankingPolicy>,
        observer: Arc<dyn RankingObserver>,
    ) -> Self {
        Self {
            repository,
            requests,
            policy,
            observer,
        }
    }

    pub async fn handle(&self, cmd: CreateHistoryCommand) -> Result<CreateHistoryResult, HistoryError> {
        // 1. Validate request shape
        cmd.input
            .validate()
            .map_err(|e| HistoryError::validation(e.field().to_string(), e.to_string()))?;

        // 2. Reference must exist
        self.requests
            .find_by_id(cmd.reference_request)
            .await?
            .ok_or_else(|| HistoryError::reference_not_found(cmd.reference_request))?;

        // 3. Compute
        let unmatched_comparisons = count_unmatched(&cmd.input);
        if unmatched_comparisons > 0 {
            warn!(
                reference_request = %cmd.reference_request,
                unmatched = unmatched_comparisons,
                "Dropping comparisons with unknown labels"
            );
        }
        let computation =
            RankingPipeline::new(&self.policy, self.observer.as_ref()).rank_by_comparisons(&cmd.input);

        // 4. Persist
        let record = self
            .repository
            .insert(HistoryDraft::new(computation, cmd.reference_request))
            .await?;

        info!(
            history_id = %record.id(),
            reference_request = %cmd.reference_request,
            alternatives = record.alternatives().len(),
            "AHP history created"
        );

        Ok(CreateHistoryResult {
            record,
            unmatched_comparisons,
        })
    }
}

fn count_unmatched(input: &ComparisonInput) -> usize {
    let labels: Vec<&str> = input.criteria.iter().map(Criterion::label).collect();
    let criteria = MatrixBuilder::unmatched(&labels, &input.criteria_comparisons).len();
    let alternatives: usize = input
        .alternative_comparisons
        .values()
        .map(|comparisons| MatrixBuilder::unmatched(&input.alternatives, comparisons).len())
        .sum();
    criteria + alternatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::ranking::mocks::{MockHistoryRepository, MockRequestReader};
    use crate::domain::ahp::{Comparison, NoopObserver};
    use crate::domain::history::fixtures::comparison_input;
    use crate::domain::request::fixtures::request;

    fn handler(repo: Arc<MockHistoryRepository>, reader: MockRequestReader) -> CreateHistoryHandler {
        CreateHistoryHandler::new(
            repo,
            Arc::new(reader),
            Arc::new(RankingPolicy::default()),
            Arc::new(NoopObserver),
        )
    }

    fn command(reference: i64) -> CreateHistoryCommand {
        CreateHistoryCommand {
            input: comparison_input(),
            reference_request: RequestId::new(reference),
        }
    }

    #[tokio::test]
    async fn creates_record_for_existing_reference() {
        let repo = Arc::new(MockHistoryRepository::new());
        let reader = MockRequestReader::with_requests(vec![request(4, "Seminar", 5, 1, 20)]);

        let result = handler(repo.clone(), reader).handle(command(4)).await.unwrap();

        assert_eq!(result.record.reference_request(), RequestId::new(4));
        assert_eq!(result.record.ranking().top().unwrap().name, "Seminar");
        assert_eq!(result.unmatched_comparisons, 0);
        assert_eq!(repo.all().len(), 1);
    }

    #[tokio::test]
    async fn repeated_commands_create_separate_records() {
        let repo = Arc::new(MockHistoryRepository::new());
        let reader = MockRequestReader::with_requests(vec![request(4, "Seminar", 5, 1, 20)]);
        let handler = handler(repo.clone(), reader);

        let first = handler.handle(command(4)).await.unwrap();
        let second = handler.handle(command(4)).await.unwrap();

        assert_ne!(first.record.id(), second.record.id());
        assert_eq!(repo.all().len(), 2);
    }

    #[tokio::test]
    async fn missing_reference_is_typed_not_found() {
        let repo = Arc::new(MockHistoryRepository::new());
        let result = handler(repo.clone(), MockRequestReader::empty())
            .handle(command(99))
            .await;

        assert_eq!(result.unwrap_err(), HistoryError::ReferenceNotFound(RequestId::new(99)));
        assert!(repo.all().is_empty());
    }

    #[tokio::test]
    async fn invalid_shape_fails_before_lookup() {
        let repo = Arc::new(MockHistoryRepository::new());
        let mut cmd = command(4);
        cmd.input.alternatives.clear();

        let result = handler(repo.clone(), MockRequestReader::empty()).handle(cmd).await;

        assert!(matches!(
            result,
            Err(HistoryError::ValidationFailed { ref field, .. }) if field == "alternatives"
        ));
    }

    #[tokio::test]
    async fn counts_unmatched_comparisons() {
        let repo = Arc::new(MockHistoryRepository::new());
        let reader = MockRequestReader::with_requests(vec![request(4, "Seminar", 5, 1, 20)]);
        let mut cmd = command(4);
        cmd.input
            .criteria_comparisons
            .push(Comparison::new("Urgency", "Budget", 2.0));
        cmd.input
            .alternative_comparisons
            .get_mut(&Criterion::Urgency)
            .unwrap()
            .push(Comparison::new("Seminar", "Gala", 4.0));

        let result = handler(repo, reader).handle(cmd).await.unwrap();
        assert_eq!(result.unmatched_comparisons, 2);
    }

    #[tokio::test]
    async fn persistence_failure_propagates() {
        let repo = Arc::new(MockHistoryRepository::failing());
        let reader = MockRequestReader::with_requests(vec![request(4, "Seminar", 5, 1, 20)]);

        let result = handler(repo.clone(), reader).handle(command(4)).await;

        assert!(matches!(result, Err(HistoryError::Infrastructure(_))));
        assert!(repo.all().is_empty());
    }
}
