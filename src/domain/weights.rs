//! Weight vector for criterion importance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Number of decimal places the weight sum is rounded to before the
/// equality check against 1.0.
pub const WEIGHT_SUM_DECIMALS: u32 = 10;

/// Per-criterion importance weights, positionally aligned with the
/// decision matrix columns.
///
/// Every weight is a finite non-negative number and the weights sum to
/// exactly 1.0 after rounding to [`WEIGHT_SUM_DECIMALS`] places; both
/// properties are enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    weights: Vec<f64>,
}

impl WeightVector {
    /// Creates a weight vector, validating each entry and the sum.
    pub fn try_new(weights: Vec<f64>) -> Result<Self, ValidationError> {
        for weight in &weights {
            if !weight.is_finite() {
                return Err(ValidationError::not_finite("weight"));
            }
            if *weight < 0.0 {
                return Err(ValidationError::out_of_range(
                    "weight",
                    0.0,
                    1.0,
                    *weight,
                ));
            }
        }
        let sum: f64 = weights.iter().sum();
        if round_to_decimals(sum, WEIGHT_SUM_DECIMALS) != 1.0 {
            return Err(ValidationError::UnnormalizedWeights { sum });
        }
        Ok(Self { weights })
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the vector holds no weights.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the weight for criterion column `j`.
    pub fn get(&self, j: usize) -> f64 {
        self.weights[j]
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the exact (unrounded) weight sum.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
