//! Ranking policy constants and the configurable policy value.
//!
//! The criteria importance vector and the Saaty clamp bounds are policy, not
//! algorithm: the defaults live here as named constants and can be replaced
//! through configuration without touching the solver.

use serde::{Deserialize, Serialize};

use super::PerCriterion;

/// Upper bound of the Saaty comparison scale.
pub const SAATY_MAX: f64 = 9.0;

/// Lower bound of the Saaty comparison scale.
pub const SAATY_MIN: f64 = 1.0 / SAATY_MAX;

/// Denominator substituted for a zero score when the numerator is non-zero.
pub const ZERO_SCORE_EPSILON: f64 = 1e-9;

/// Conventional CR threshold under which a matrix is considered consistent.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Raw importance of each criterion used to build the criteria matrix.
pub const DEFAULT_CRITERIA_IMPORTANCE: PerCriterion<f64> = PerCriterion {
    urgency: 5.0,
    importance: 3.0,
    participants: 2.0,
    complexity: 1.0,
};

/// Saaty random consistency index for matrix sizes 1..=10.
const RANDOM_INDEX: [f64; 10] = [0.00, 0.00, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Returns the random index for a matrix of size `n`, if tabulated.
pub fn random_index(n: usize) -> Option<f64> {
    n.checked_sub(1).and_then(|i| RANDOM_INDEX.get(i)).copied()
}

/// Clamp bounds for ratios placed into a pairwise matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaatyScale {
    ceiling: f64,
}

impl SaatyScale {
    /// Creates a symmetric scale `[1/ceiling, ceiling]`.
    ///
    /// Ceilings that are not finite or not above 1 fall back to the default.
    pub fn new(ceiling: f64) -> Self {
        if ceiling.is_finite() && ceiling > 1.0 {
            Self { ceiling }
        } else {
            Self::default()
        }
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn floor(&self) -> f64 {
        1.0 / self.ceiling
    }

    /// Saturates a ratio into the scale.
    ///
    /// Non-finite and non-positive ratios map to the neutral value 1.
    pub fn clip(&self, ratio: f64) -> f64 {
        if !ratio.is_finite() || ratio <= 0.0 {
            return 1.0;
        }
        ratio.clamp(self.floor(), self.ceiling)
    }
}

impl Default for SaatyScale {
    fn default() -> Self {
        Self { ceiling: SAATY_MAX }
    }
}

/// Everything about a ranking run that is policy rather than input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingPolicy {
    pub criteria_importance: PerCriterion<f64>,
    pub scale: SaatyScale,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            criteria_importance: DEFAULT_CRITERIA_IMPORTANCE,
            scale: SaatyScale::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_index_covers_one_to_ten() {
        assert_eq!(random_index(0), None);
        assert_eq!(random_index(1), Some(0.0));
        assert_eq!(random_index(3), Some(0.58));
        assert_eq!(random_index(4), Some(0.90));
        assert_eq!(random_index(10), Some(1.49));
        assert_eq!(random_index(11), None);
    }

    #[test]
    fn clip_saturates_to_bounds() {
        let scale = SaatyScale::default();
        assert_eq!(scale.clip(20.0), 9.0);
        assert!((scale.clip(0.01) - 1.0 / 9.0).abs() < 1e-12);
        assert_eq!(scale.clip(2.5), 2.5);
    }

    #[test]
    fn clip_maps_degenerate_ratios_to_neutral() {
        let scale = SaatyScale::default();
        assert_eq!(scale.clip(f64::NAN), 1.0);
        assert_eq!(scale.clip(f64::INFINITY), 1.0);
        assert_eq!(scale.clip(0.0), 1.0);
        assert_eq!(scale.clip(-3.0), 1.0);
    }

    #[test]
    fn invalid_ceiling_falls_back_to_default() {
        assert_eq!(SaatyScale::new(0.5), SaatyScale::default());
        assert_eq!(SaatyScale::new(f64::NAN), SaatyScale::default());
        assert_eq!(SaatyScale::new(5.0).ceiling(), 5.0);
    }

    #[test]
    fn default_policy_uses_five_three_two_one() {
        let policy = RankingPolicy::default();
        assert_eq!(policy.criteria_importance.to_vec(), vec![5.0, 3.0, 2.0, 1.0]);
    }
}
