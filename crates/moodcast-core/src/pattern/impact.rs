use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

use crate::constants::{IMPACT_MAX, IMPACT_MIN};

/// Signed mood contribution clamped to [-3.0, +3.0].
/// A pattern's impact is applied on days the pattern fires.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct MoodImpact(f64);

impl MoodImpact {
    /// Create a new MoodImpact, clamping to the valid range.
    /// Non-finite inputs collapse to zero rather than poisoning arithmetic.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(IMPACT_MIN, IMPACT_MAX))
        } else {
            Self(0.0)
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this impact lifts mood.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for MoodImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2}", self.0)
    }
}

impl From<f64> for MoodImpact {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<MoodImpact> for f64 {
    fn from(i: MoodImpact) -> Self {
        i.0
    }
}

impl Neg for MoodImpact {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
