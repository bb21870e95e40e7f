//! Percentage share value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A share of a total, expressed on a 0-100 scale.
///
/// Displays with two decimals and a trailing `%`, e.g. `60.00%`.
/// Non-finite inputs collapse to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Percentage from a value already on the 0-100 scale.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Computes `part / total * 100`, or zero when the total is not positive.
    pub fn share_of(part: f64, total: f64) -> Self {
        if total > 0.0 && total.is_finite() {
            Self::new(part / total * 100.0)
        } else {
            Self::ZERO
        }
    }

    /// Returns the value on the 0-100 scale.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
