//! Closeness index value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Relative closeness of an alternative to the ideal point.
///
/// 1.0 means the alternative coincides with the ideal point, 0.0 with
/// the anti-ideal point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Closeness(f64);

impl Closeness {
    /// The anti-ideal end of the scale.
    pub const MIN: Self = Self(0.0);

    /// The ideal end of the scale.
    pub const MAX: Self = Self(1.0);

    /// Creates a new Closeness, clamping to [0, 1].
    ///
    /// Intended for values that are in range mathematically but may
    /// overshoot by a rounding error.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Closeness, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("closeness"));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("closeness", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Closeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
