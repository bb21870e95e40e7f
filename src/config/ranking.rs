//! Ranking policy configuration

use serde::Deserialize;

use crate::domain::ahp::policy::{DEFAULT_CRITERIA_IMPORTANCE, SAATY_MAX};
use crate::domain::ahp::{PerCriterion, RankingPolicy, SaatyScale};

use super::error::ValidationError;

/// Criteria importance and Saaty scale bounds.
///
/// `REQUEST_RANKER__RANKING__URGENCY_IMPORTANCE=7` overrides one weight.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_urgency")]
    pub urgency_importance: f64,

    #[serde(default = "default_importance")]
    pub importance_importance: f64,

    #[serde(default = "default_participants")]
    pub participants_importance: f64,

    #[serde(default = "default_complexity")]
    pub complexity_importance: f64,

    /// Upper bound of the comparison scale; the lower bound is its inverse.
    #[serde(default = "default_saaty_ceiling")]
    pub saaty_ceiling: f64,
}

impl RankingConfig {
    fn importance(&self) -> PerCriterion<f64> {
        PerCriterion {
            urgency: self.urgency_importance,
            importance: self.importance_importance,
            participants: self.participants_importance,
            complexity: self.complexity_importance,
        }
    }

    /// Builds the policy used by every ranking run.
    pub fn to_policy(&self) -> RankingPolicy {
        RankingPolicy {
            criteria_importance: self.importance(),
            scale: SaatyScale::new(self.saaty_ceiling),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (criterion, value) in self.importance().iter() {
            if !value.is_finite() || *value <= 0.0 {
                return Err(ValidationError::InvalidCriterionImportance(criterion.label()));
            }
        }
        if !self.saaty_ceiling.is_finite() || self.saaty_ceiling <= 1.0 {
            return Err(ValidationError::InvalidSaatyCeiling);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            urgency_importance: default_urgency(),
            importance_importance: default_importance(),
            participants_importance: default_participants(),
            complexity_importance: default_complexity(),
            saaty_ceiling: default_saaty_ceiling(),
        }
    }
}

fn default_urgency() -> f64 {
    DEFAULT_CRITERIA_IMPORTANCE.urgency
}

fn default_importance() -> f64 {
    DEFAULT_CRITERIA_IMPORTANCE.importance
}

fn default_participants() -> f64 {
    DEFAULT_CRITERIA_IMPORTANCE.participants
}

fn default_complexity() -> f64 {
    DEFAULT_CRITERIA_IMPORTANCE.complexity
}

fn default_saaty_ceiling() -> f64 {
    SAATY_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_policy() {
        let config = RankingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.to_policy(), RankingPolicy::default());
    }

    #[test]
    fn test_custom_weights_flow_into_policy() {
        let config = RankingConfig {
            urgency_importance: 7.0,
            saaty_ceiling: 5.0,
            ..Default::default()
        };
        let policy = config.to_policy();
        assert_eq!(policy.criteria_importance.urgency, 7.0);
        assert_eq!(policy.scale.ceiling(), 5.0);
        assert!((policy.scale.floor() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_importance_is_rejected() {
        let config = RankingConfig {
            participants_importance: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCriterionImportance("Participants"))
        ));
    }

    #[test]
    fn test_ceiling_must_exceed_one() {
        let config = RankingConfig {
            saaty_ceiling: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSaatyCeiling)
        ));
    }
}
