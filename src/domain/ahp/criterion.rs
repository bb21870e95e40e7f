//! The fixed set of ranking criteria.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One ranking dimension.
///
/// Declaration order is the canonical order used for the criteria matrix
/// and for every per-criterion vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criterion {
    Urgency,
    Importance,
    Participants,
    Complexity,
}

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; 4] = [
        Criterion::Urgency,
        Criterion::Importance,
        Criterion::Participants,
        Criterion::Complexity,
    ];

    /// Returns the display label, also used as the comparison item label.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Urgency => "Urgency",
            Criterion::Importance => "Importance",
            Criterion::Participants => "Participants",
            Criterion::Complexity => "Complexity",
        }
    }

    /// Position in canonical order.
    pub fn index(&self) -> usize {
        match self {
            Criterion::Urgency => 0,
            Criterion::Importance => 1,
            Criterion::Participants => 2,
            Criterion::Complexity => 3,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Criterion::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "criterion",
                    format!(
                        "unknown criterion '{}', expected one of Urgency, Importance, Participants, Complexity",
                        trimmed
                    ),
                )
            })
    }
}

/// One value per criterion.
///
/// Replaces string-keyed maps: every criterion is always present, and adding a
/// criterion is a compile error everywhere this type is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PerCriterion<T> {
    pub urgency: T,
    pub importance: T,
    pub participants: T,
    pub complexity: T,
}

impl<T> PerCriterion<T> {
    /// Builds a value for every criterion from a function.
    pub fn from_fn(mut f: impl FnMut(Criterion) -> T) -> Self {
        Self {
            urgency: f(Criterion::Urgency),
            importance: f(Criterion::Importance),
            participants: f(Criterion::Participants),
            complexity: f(Criterion::Complexity),
        }
    }

    pub fn get(&self, criterion: Criterion) -> &T {
        match criterion {
            Criterion::Urgency => &self.urgency,
            Criterion::Importance => &self.importance,
            Criterion::Participants => &self.participants,
            Criterion::Complexity => &self.complexity,
        }
    }

    /// Iterates in canonical criterion order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &T)> {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Criterion, &T) -> U) -> PerCriterion<U> {
        PerCriterion::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T: Copy> PerCriterion<T> {
    /// Values in canonical criterion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().map(|(_, v)| *v).collect()
    }
}
