//! AHP module - Pairwise comparison ranking.
//!
//! Builds reciprocal comparison matrices, solves them for priority weights
//! and consistency, and aggregates criterion and alternative weights into a
//! single ranking.

mod aggregator;
mod criterion;
mod matrix;
mod observer;
mod pipeline;
pub mod policy;
mod score_deriver;
mod solver;

pub use aggregator::{AlternativeRef, Aggregator, RankedEntry, RankedResult, ScoreRange};
pub use criterion::{Criterion, PerCriterion};
pub use matrix::{Comparison, MatrixBuilder, PairwiseMatrix};
pub use observer::{MatrixSubject, NoopObserver, RankingObserver};
pub use pipeline::{
    AhpComputation, ComparisonInput, MatrixAnalysis, RankingPipeline, ScoreAnalysis, ScoreRanking,
};
pub use policy::{RankingPolicy, SaatyScale};
pub use score_deriver::{CriterionScores, ScoreDeriver};
pub use solver::{AhpSolution, AhpSolver, PriorityVector};
