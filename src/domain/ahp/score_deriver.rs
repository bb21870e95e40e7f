//! Raw per-alternative scores for the four fixed criteria.

use crate::domain::foundation::Timestamp;
use crate::domain::request::{Alternative, ComplexityRating};

use super::PerCriterion;

/// Below this gap urgency is scored per hour.
const HOURLY_WINDOW_DAYS: f64 = 3.0;

/// Up to this gap urgency is scored per day; beyond it, logarithmically.
const DAILY_WINDOW_DAYS: f64 = 30.0;

const URGENCY_FLOOR: f64 = 0.1;
const URGENCY_CEILING: f64 = 9.0;

/// Complexity scores are `COMPLEXITY_BASE - rating`.
const COMPLEXITY_BASE: f64 = 6.0;

/// Raw score vectors, one entry per alternative in input order.
pub type CriterionScores = PerCriterion<Vec<f64>>;

/// Score derivation functions.
pub struct ScoreDeriver;

impl ScoreDeriver {
    /// Scores how soon an event starts after its request was filed.
    ///
    /// # Algorithm
    /// With `gap = event_start - created_at`, clamped to zero:
    /// - gap < 3 days: `9 / (hours + 1)`
    /// - gap <= 30 days: `9 / (days + 1)`
    /// - otherwise: `9 / ln(days + 2)`
    ///
    /// The result is clamped to `[0.1, 9]`. Hours and days are fractional.
    pub fn urgency(created_at: &Timestamp, event_start: &Timestamp) -> f64 {
        let gap = event_start.duration_since(created_at);
        let hours = (gap.num_milliseconds() as f64 / 3_600_000.0).max(0.0);
        let days = hours / 24.0;

        let score = if days < HOURLY_WINDOW_DAYS {
            URGENCY_CEILING / (hours + 1.0)
        } else if days <= DAILY_WINDOW_DAYS {
            URGENCY_CEILING / (days + 1.0)
        } else {
            URGENCY_CEILING / (days + 2.0).ln()
        };

        score.clamp(URGENCY_FLOOR, URGENCY_CEILING)
    }

    /// `1 / max(priority_class, 1)`: smaller classes are more important.
    pub fn importance(priority_class: i32) -> f64 {
        1.0 / f64::from(priority_class.max(1))
    }

    pub fn participants(count: u32) -> f64 {
        f64::from(count)
    }

    /// `6 - rating`, with a missing rating read as 1.
    pub fn complexity(rating: Option<ComplexityRating>) -> f64 {
        let rating = rating.unwrap_or_default();
        COMPLEXITY_BASE - f64::from(rating.value())
    }

    /// Derives all four score vectors for a set of alternatives.
    pub fn derive(alternatives: &[Alternative]) -> CriterionScores {
        PerCriterion {
            urgency: alternatives
                .iter()
                .map(|a| Self::urgency(&a.created_at, &a.event_start))
                .collect(),
            importance: alternatives
                .iter()
                .map(|a| Self::importance(a.priority_class))
                .collect(),
            participants: alternatives
                .iter()
                .map(|a| Self::participants(a.participants))
                .collect(),
            complexity: alternatives
                .iter()
                .map(|a| Self::complexity(a.complexity))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RequestId;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn base() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap())
    }

    #[test]
    fn urgency_just_under_three_days_uses_hours() {
        let created = base();
        let start = created.add_hours(71).add_minutes(59);
        let score = ScoreDeriver::urgency(&created, &start);

        let hours = 71.0 + 59.0 / 60.0;
        assert!((score - 9.0 / (hours + 1.0)).abs() < 1e-9);
        assert!((0.1..=9.0).contains(&score));
    }

    #[test]
    fn urgency_at_three_days_uses_days() {
        let created = base();
        let start = created.add_hours(72);
        let score = ScoreDeriver::urgency(&created, &start);

        assert!((score - 9.0 / 4.0).abs() < 1e-9);
        assert!((0.1..=9.0).contains(&score));
    }

    #[test]
    fn urgency_beyond_thirty_days_is_logarithmic() {
        let created = base();
        let start = created.add_days(60);
        let score = ScoreDeriver::urgency(&created, &start);
        assert!((score - 9.0 / 62.0f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn urgency_same_instant_hits_ceiling() {
        let created = base();
        assert_eq!(ScoreDeriver::urgency(&created, &created), 9.0);
    }

    #[test]
    fn urgency_negative_gap_is_clamped_to_zero() {
        let created = base();
        let start = created.add_days(-5);
        assert_eq!(ScoreDeriver::urgency(&created, &start), 9.0);
    }

    #[test]
    fn importance_treats_non_positive_as_one() {
        assert_eq!(ScoreDeriver::importance(0), 1.0);
        assert_eq!(ScoreDeriver::importance(-4), 1.0);
        assert_eq!(ScoreDeriver::importance(1), 1.0);
        assert_eq!(ScoreDeriver::importance(4), 0.25);
    }

    #[test]
    fn participants_is_raw_count() {
        assert_eq!(ScoreDeriver::participants(0), 0.0);
        assert_eq!(ScoreDeriver::participants(250), 250.0);
    }

    #[test]
    fn missing_complexity_scores_five() {
        assert_eq!(ScoreDeriver::complexity(None), 5.0);
    }

    #[test]
    fn complexity_inverts_rating() {
        let rating = ComplexityRating::try_new(4).unwrap();
        assert_eq!(ScoreDeriver::complexity(Some(rating)), 2.0);
    }

    #[test]
    fn derive_keeps_input_order() {
        let created = base();
        let alternatives = vec![
            Alternative::new(RequestId::new(1), "Seminar", created, created.add_days(10))
                .with_priority_class(2)
                .with_participants(40),
            Alternative::new(RequestId::new(2), "Workshop", created, created.add_days(1))
                .with_priority_class(1)
                .with_participants(15)
                .with_complexity(ComplexityRating::try_new(3).unwrap()),
        ];

        let scores = ScoreDeriver::derive(&alternatives);

        assert_eq!(scores.importance, vec![0.5, 1.0]);
        assert_eq!(scores.participants, vec![40.0, 15.0]);
        assert_eq!(scores.complexity, vec![5.0, 3.0]);
        // Ten days uses the days branch, one day still uses the hours branch.
        assert!((scores.urgency[0] - 9.0 / 11.0).abs() < 1e-9);
        assert!((scores.urgency[1] - 9.0 / 25.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn urgency_is_always_on_scale(minutes in -100_000i64..2_000_000) {
            let created = base();
            let start = created.add_minutes(minutes);
            let score = ScoreDeriver::urgency(&created, &start);
            prop_assert!((0.1..=9.0).contains(&score));
        }
    }
}
