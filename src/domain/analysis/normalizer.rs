//! Column normalization and weighting.

use tracing::debug;

use super::AnalysisError;
use crate::domain::matrix::{DecisionMatrix, WeightedMatrix};
use crate::domain::weights::WeightVector;

/// Rescales each criterion column to unit Euclidean length, then
/// applies its weight.
///
/// # Algorithm
/// For column j: `r_j = sqrt(Σ_i m[i][j]²)`, then
/// `weighted[i][j] = (m[i][j] / r_j) * w[j]`.
///
/// # Edge Cases
/// - All-zero column: `r_j = 0` would divide by zero, so it is
///   rejected as [`AnalysisError::DegenerateCriterion`].
/// - Empty matrix: returns an empty weighted matrix.
pub fn normalize(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
) -> Result<WeightedMatrix, AnalysisError> {
    if weights.len() != matrix.criterion_count() {
        return Err(AnalysisError::ShapeMismatch {
            context: "weights",
            expected: matrix.criterion_count(),
            actual: weights.len(),
        });
    }

    let mut norms = Vec::with_capacity(matrix.criterion_count());
    for j in 0..matrix.criterion_count() {
        let norm = matrix.column(j).map(|v| v * v).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Err(AnalysisError::DegenerateCriterion { column: j });
        }
        norms.push(norm);
    }
    debug!(columns = norms.len(), "computed column norms");

    let rows = matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, value)| (value / norms[j]) * weights.get(j))
                .collect()
        })
        .collect();

    Ok(WeightedMatrix::from_rows(rows))
}
