//! Injectable hook for reporting intermediate ranking results.

use std::fmt;

use super::{AlternativeRef, Criterion, CriterionScores, MatrixAnalysis, RankedResult};

/// Which matrix a [`RankingObserver::matrix_solved`] call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixSubject {
    Criteria,
    Alternatives(Criterion),
}

impl fmt::Display for MatrixSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixSubject::Criteria => f.write_str("criteria"),
            MatrixSubject::Alternatives(c) => write!(f, "alternatives/{}", c),
        }
    }
}

/// Receives intermediate values as a ranking is computed.
///
/// All methods default to doing nothing.
pub trait RankingObserver: Send + Sync {
    fn scores_derived(&self, _alternatives: &[AlternativeRef], _scores: &CriterionScores) {}

    fn matrix_solved(&self, _subject: MatrixSubject, _analysis: &MatrixAnalysis) {}

    fn ranking_completed(&self, _ranking: &RankedResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RankingObserver for NoopObserver {}
