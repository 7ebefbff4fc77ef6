//! Ideal and anti-ideal reference point resolution.

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::domain::foundation::CriterionSign;
use crate::domain::matrix::WeightedMatrix;

/// The positive-ideal and negative-ideal reference vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    ideal: Vec<f64>,
    anti_ideal: Vec<f64>,
}

impl IdealPoints {
    /// Derives both reference vectors from the weighted matrix.
    ///
    /// Per column: benefit criteria take the column max as ideal and
    /// min as anti-ideal; cost criteria the other way around.
    pub fn resolve(
        weighted: &WeightedMatrix,
        signs: &[CriterionSign],
    ) -> Result<Self, AnalysisError> {
        if signs.len() != weighted.criterion_count() {
            return Err(AnalysisError::ShapeMismatch {
                context: "criteria signs",
                expected: weighted.criterion_count(),
                actual: signs.len(),
            });
        }

        let mut ideal = Vec::with_capacity(signs.len());
        let mut anti_ideal = Vec::with_capacity(signs.len());
        for (j, sign) in signs.iter().enumerate() {
            let (min, max) = column_extrema(weighted, j);
            if sign.is_benefit() {
                ideal.push(max);
                anti_ideal.push(min);
            } else {
                ideal.push(min);
                anti_ideal.push(max);
            }
        }

        Ok(Self { ideal, anti_ideal })
    }

    /// Returns the positive-ideal vector.
    pub fn ideal(&self) -> &[f64] {
        &self.ideal
    }

    /// Returns the negative-ideal vector.
    pub fn anti_ideal(&self) -> &[f64] {
        &self.anti_ideal
    }
}

/// Min and max of a weighted column. Cells are finite by construction,
/// so a plain comparison fold is enough.
fn column_extrema(weighted: &WeightedMatrix, j: usize) -> (f64, f64) {
    weighted
        .column(j)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
}
