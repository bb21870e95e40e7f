//! End-to-end ranking runs built from the AHP components.
//!
//! Two entry points exist. [`RankingPipeline::rank_by_scores`] derives
//! judgments from request attributes and is used for live listings.
//! [`RankingPipeline::rank_by_comparisons`] takes explicit judgments and
//! produces the [`AhpComputation`] that gets stored as history.
//!
//! Both are synchronous and pure apart from the injected observer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::foundation::ValidationError;
use crate::domain::request::Alternative;

use super::{
    AhpSolver, AlternativeRef, Aggregator, Comparison, Criterion, CriterionScores, MatrixBuilder,
    MatrixSubject, PairwiseMatrix, PerCriterion, PriorityVector, RankedResult, RankingObserver,
    RankingPolicy, ScoreDeriver,
};

/// A comparison matrix together with its solved weights and CR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixAnalysis {
    pub matrix: PairwiseMatrix,
    pub weights: PriorityVector,
    pub cr: f64,
}

impl MatrixAnalysis {
    /// Solves `matrix` and keeps it alongside the result.
    pub fn solve(matrix: PairwiseMatrix) -> Self {
        let solution = AhpSolver::solve(&matrix);
        Self {
            matrix,
            weights: solution.weights,
            cr: solution.consistency_ratio,
        }
    }
}

/// Intermediate values of a score-derived ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreAnalysis {
    pub scores: CriterionScores,
    pub criteria: MatrixAnalysis,
    pub alternatives: PerCriterion<MatrixAnalysis>,
}

/// Result of [`RankingPipeline::rank_by_scores`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRanking {
    /// `None` when there was nothing to rank.
    pub analysis: Option<ScoreAnalysis>,
    pub ranking: RankedResult,
}

/// Explicit judgments for a comparison-driven ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonInput {
    pub criteria: Vec<Criterion>,
    pub criteria_comparisons: Vec<Comparison>,
    pub alternatives: Vec<String>,
    pub alternative_comparisons: BTreeMap<Criterion, Vec<Comparison>>,
}

impl ComparisonInput {
    /// Checks request shape before any computation.
    ///
    /// Labels that do not match anything are not an error here; they are
    /// dropped during matrix construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        if self.alternatives.is_empty() {
            return Err(ValidationError::empty_field("alternatives"));
        }

        let mut seen_criteria = HashSet::new();
        for criterion in &self.criteria {
            if !seen_criteria.insert(*criterion) {
                return Err(ValidationError::duplicate("criteria", criterion.label()));
            }
        }

        let mut seen_alternatives = HashSet::new();
        for name in &self.alternatives {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("alternatives"));
            }
            if !seen_alternatives.insert(name.as_str()) {
                return Err(ValidationError::duplicate("alternatives", name.clone()));
            }
        }

        Self::validate_values("criteria_comparison", &self.criteria_comparisons)?;
        for comparisons in self.alternative_comparisons.values() {
            Self::validate_values("alternative_comparison", comparisons)?;
        }
        Ok(())
    }

    fn validate_values(field: &str, comparisons: &[Comparison]) -> Result<(), ValidationError> {
        for comparison in comparisons {
            if comparison.is_self_comparison() {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("comparison {} vs itself is not allowed", comparison.item1),
                ));
            }
            if !comparison.has_usable_value() {
                return Err(ValidationError::invalid_format(
                    field,
                    format!(
                        "comparison {} vs {} must have a positive value with a finite reciprocal, got {}",
                        comparison.item1, comparison.item2, comparison.value
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Everything a comparison-driven ranking produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AhpComputation {
    pub criteria: Vec<Criterion>,
    pub criteria_analysis: MatrixAnalysis,
    pub alternatives: Vec<String>,
    /// One entry per criterion that had comparisons, listed or not.
    pub alternative_analyses: BTreeMap<Criterion, MatrixAnalysis>,
    pub ranking: RankedResult,
}

/// Runs rankings under a given policy, reporting to an observer.
pub struct RankingPipeline<'a> {
    policy: &'a RankingPolicy,
    observer: &'a dyn RankingObserver,
}

impl<'a> RankingPipeline<'a> {
    pub fn new(policy: &'a RankingPolicy, observer: &'a dyn RankingObserver) -> Self {
        Self { policy, observer }
    }

    /// Ranks alternatives from their attributes.
    ///
    /// Every criterion is judged by score ratios, and the criteria matrix is
    /// built from the policy's importance vector.
    ///
    /// # Edge Cases
    /// - No alternatives: empty ranking, no matrices computed
    pub fn rank_by_scores(&self, alternatives: &[Alternative]) -> ScoreRanking {
        if alternatives.is_empty() {
            return ScoreRanking {
                analysis: None,
                ranking: RankedResult::empty(),
            };
        }

        let refs: Vec<AlternativeRef> = alternatives.iter().map(Alternative::to_ref).collect();
        let scores = ScoreDeriver::derive(alternatives);
        self.observer.scores_derived(&refs, &scores);

        let criteria = self.analyze(
            MatrixSubject::Criteria,
            MatrixBuilder::from_scores(&self.policy.criteria_importance.to_vec(), &self.policy.scale),
        );

        let per_criterion = scores.map(|criterion, values| {
            self.analyze(
                MatrixSubject::Alternatives(criterion),
                MatrixBuilder::from_scores(values, &self.policy.scale),
            )
        });

        let alternative_weights: BTreeMap<Criterion, PriorityVector> = per_criterion
            .iter()
            .map(|(c, analysis)| (c, analysis.weights.clone()))
            .collect();

        let ranking = Aggregator::aggregate(
            &Criterion::ALL,
            &criteria.weights,
            &alternative_weights,
            &refs,
        );
        self.observer.ranking_completed(&ranking);

        ScoreRanking {
            analysis: Some(ScoreAnalysis {
                scores,
                criteria,
                alternatives: per_criterion,
            }),
            ranking,
        }
    }

    /// Ranks labelled alternatives from explicit pairwise judgments.
    ///
    /// # Edge Cases
    /// - Criterion with comparisons but not in `criteria`: analysed and kept,
    ///   contributes nothing to scores
    /// - Listed criterion with no comparisons: contributes nothing
    /// - Unmatched labels: dropped
    pub fn rank_by_comparisons(&self, input: &ComparisonInput) -> AhpComputation {
        let labels: Vec<&str> = input.criteria.iter().map(Criterion::label).collect();
        let criteria_analysis = self.analyze(
            MatrixSubject::Criteria,
            MatrixBuilder::from_comparisons(&labels, &input.criteria_comparisons),
        );

        let alternative_analyses: BTreeMap<Criterion, MatrixAnalysis> = input
            .alternative_comparisons
            .iter()
            .map(|(criterion, comparisons)| {
                let analysis = self.analyze(
                    MatrixSubject::Alternatives(*criterion),
                    MatrixBuilder::from_comparisons(&input.alternatives, comparisons),
                );
                (*criterion, analysis)
            })
            .collect();

        let alternative_weights: BTreeMap<Criterion, PriorityVector> = alternative_analyses
            .iter()
            .map(|(c, analysis)| (*c, analysis.weights.clone()))
            .collect();

        let refs: Vec<AlternativeRef> = input
            .alternatives
            .iter()
            .map(|name| AlternativeRef::named(name.as_str()))
            .collect();

        let ranking = Aggregator::aggregate(
            &input.criteria,
            &criteria_analysis.weights,
            &alternative_weights,
            &refs,
        );
        self.observer.ranking_completed(&ranking);

        AhpComputation {
            criteria: input.criteria.clone(),
            criteria_analysis,
            alternatives: input.alternatives.clone(),
            alternative_analyses,
            ranking,
        }
    }

    fn analyze(&self, subject: MatrixSubject, matrix: PairwiseMatrix) -> MatrixAnalysis {
        let analysis = MatrixAnalysis::solve(matrix);
        self.observer.matrix_solved(subject, &analysis);
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::NoopObserver;
    use crate::domain::foundation::{RequestId, Timestamp};
    use crate::domain::request::ComplexityRating;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        subjects: Mutex<Vec<String>>,
        rankings: Mutex<usize>,
    }

    impl RankingObserver for RecordingObserver {
        fn matrix_solved(&self, subject: MatrixSubject, _analysis: &MatrixAnalysis) {
            self.subjects.lock().unwrap().push(subject.to_string());
        }

        fn ranking_completed(&self, _ranking: &RankedResult) {
            *self.rankings.lock().unwrap() += 1;
        }
    }

    fn alternative(id: i64, name: &str, days_ahead: i64, priority: i32, participants: u32) -> Alternative {
        let created = Timestamp::now();
        Alternative::new(RequestId::new(id), name, created, created.add_days(days_ahead))
            .with_priority_class(priority)
            .with_participants(participants)
    }

    #[test]
    fn empty_alternatives_short_circuit() {
        let policy = RankingPolicy::default();
        let observer = RecordingObserver::default();
        let result = RankingPipeline::new(&policy, &observer).rank_by_scores(&[]);

        assert!(result.ranking.is_empty());
        assert!(result.analysis.is_none());
        assert!(observer.subjects.lock().unwrap().is_empty());
    }

    #[test]
    fn dominant_alternative_ranks_first() {
        let alternatives = vec![
            alternative(1, "Small", 5, 3, 10),
            alternative(2, "Big", 5, 1, 200),
            alternative(3, "Middle", 5, 2, 50),
        ];
        let policy = RankingPolicy::default();
        let result = RankingPipeline::new(&policy, &NoopObserver).rank_by_scores(&alternatives);

        let order: Vec<&str> = result.ranking.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["Big", "Middle", "Small"]);
        assert_eq!(result.ranking.entries()[0].alternative_id, Some(RequestId::new(2)));

        let total: f64 = result.ranking.entries().iter().map(|e| e.score).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_ranking_solves_five_matrices() {
        let alternatives = vec![alternative(1, "A", 5, 1, 10), alternative(2, "B", 5, 1, 10)];
        let policy = RankingPolicy::default();
        let observer = RecordingObserver::default();
        let result = RankingPipeline::new(&policy, &observer).rank_by_scores(&alternatives);

        assert_eq!(
            *observer.subjects.lock().unwrap(),
            vec![
                "criteria",
                "alternatives/Urgency",
                "alternatives/Importance",
                "alternatives/Participants",
                "alternatives/Complexity",
            ]
        );
        assert_eq!(*observer.rankings.lock().unwrap(), 1);

        let analysis = result.analysis.unwrap();
        assert!(analysis.criteria.cr < 1e-9);
        assert_eq!(analysis.scores.complexity, vec![5.0, 5.0]);
    }

    #[test]
    fn complexity_rating_shifts_ranking() {
        let alternatives = vec![
            alternative(1, "Hard", 5, 1, 10).with_complexity(ComplexityRating::try_new(5).unwrap()),
            alternative(2, "Easy", 5, 1, 10),
        ];
        let policy = RankingPolicy::default();
        let result = RankingPipeline::new(&policy, &NoopObserver).rank_by_scores(&alternatives);
        assert_eq!(result.ranking.top().unwrap().name, "Easy");
    }

    fn comparison_input() -> ComparisonInput {
        let mut alternative_comparisons = BTreeMap::new();
        alternative_comparisons.insert(
            Criterion::Urgency,
            vec![Comparison::new("Seminar", "Concert", 3.0)],
        );
        alternative_comparisons.insert(
            Criterion::Importance,
            vec![Comparison::new("Concert", "Seminar", 5.0)],
        );
        alternative_comparisons.insert(
            Criterion::Complexity,
            vec![Comparison::new("Concert", "Seminar", 9.0)],
        );

        ComparisonInput {
            criteria: vec![Criterion::Urgency, Criterion::Importance],
            criteria_comparisons: vec![Comparison::new("Urgency", "Importance", 3.0)],
            alternatives: vec!["Seminar".to_string(), "Concert".to_string()],
            alternative_comparisons,
        }
    }

    #[test]
    fn comparison_ranking_combines_levels() {
        let policy = RankingPolicy::default();
        let computation =
            RankingPipeline::new(&policy, &NoopObserver).rank_by_comparisons(&comparison_input());

        let w = computation.criteria_analysis.weights.as_slice();
        assert!((w[0] - 0.75).abs() < 1e-9);
        assert!((w[1] - 0.25).abs() < 1e-9);

        // Seminar: 0.75 * 0.75 + 0.25 * (1/6) = 0.604166...
        let top = computation.ranking.top().unwrap();
        assert_eq!(top.name, "Seminar");
        assert!((top.score - (0.75 * 0.75 + 0.25 / 6.0)).abs() < 1e-9);
        assert_eq!(top.alternative_id, None);
    }

    #[test]
    fn unlisted_criterion_is_kept_but_not_scored() {
        let policy = RankingPolicy::default();
        let computation =
            RankingPipeline::new(&policy, &NoopObserver).rank_by_comparisons(&comparison_input());

        assert!(computation.alternative_analyses.contains_key(&Criterion::Complexity));
        let total: f64 = computation.ranking.entries().iter().map(|e| e.score).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_malformed_input() {
        let mut input = comparison_input();
        input.alternatives.clear();
        assert_eq!(input.validate().unwrap_err().field(), "alternatives");

        let mut input = comparison_input();
        input.criteria.push(Criterion::Urgency);
        assert!(matches!(input.validate(), Err(ValidationError::Duplicate { .. })));

        let mut input = comparison_input();
        input.criteria_comparisons.push(Comparison::new("Urgency", "Importance", -1.0));
        assert_eq!(input.validate().unwrap_err().field(), "criteria_comparison");

        assert!(comparison_input().validate().is_ok());
    }

    #[test]
    fn validate_rejects_value_without_finite_reciprocal() {
        let mut input = comparison_input();
        input
            .criteria_comparisons
            .push(Comparison::new("Urgency", "Importance", 1e-310));

        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), "criteria_comparison");
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn validate_rejects_self_comparison() {
        let mut input = comparison_input();
        input
            .alternative_comparisons
            .get_mut(&Criterion::Urgency)
            .unwrap()
            .push(Comparison::new("Seminar", "Seminar", 3.0));

        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), "alternative_comparison");
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }
}
