//! RankingObserver that forwards intermediate results to `tracing`.

use tracing::debug;

use crate::domain::ahp::{
    AlternativeRef, CriterionScores, MatrixAnalysis, MatrixSubject, RankedResult, RankingObserver,
};

/// Emits one `debug!` event per pipeline stage under the `ahp` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRankingObserver;

impl RankingObserver for TracingRankingObserver {
    fn scores_derived(&self, alternatives: &[AlternativeRef], scores: &CriterionScores) {
        for (criterion, values) in scores.iter() {
            debug!(
                target: "ahp",
                criterion = %criterion,
                alternatives = alternatives.len(),
                scores = ?values,
                "Derived criterion scores"
            );
        }
    }

    fn matrix_solved(&self, subject: MatrixSubject, analysis: &MatrixAnalysis) {
        debug!(
            target: "ahp",
            subject = %subject,
            size = analysis.matrix.size(),
            matrix = ?analysis.matrix.rows(),
            weights = ?analysis.weights.as_slice(),
            cr = analysis.cr,
            "Solved comparison matrix"
        );
    }

    fn ranking_completed(&self, ranking: &RankedResult) {
        debug!(
            target: "ahp",
            entries = ranking.len(),
            top = ranking.top().map(|e| e.name.as_str()).unwrap_or(""),
            "Ranking completed"
        );
    }
}
