//! Closeness index computation and final ordering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AnalysisError, IdealPoints};
use crate::domain::foundation::Closeness;
use crate::domain::matrix::WeightedMatrix;

/// One alternative with its computed closeness index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative_id: String,
    pub closeness: Closeness,
}

/// Alternatives sorted descending by closeness index.
///
/// Ties keep their relative input order (the sort is stable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult {
    entries: Vec<RankedAlternative>,
}

impl RankedResult {
    /// Returns the ranked entries, best first.
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    /// Returns the number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no alternatives were ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries, best first.
    pub fn iter(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.entries.iter()
    }
}

/// Computes the closeness index per alternative and sorts descending.
///
/// # Algorithm
/// For alternative i: `s_star = dist(row_i, ideal)`,
/// `s_prime = dist(row_i, anti_ideal)`, `ci = s_prime / (s_star + s_prime)`.
///
/// # Edge Cases
/// - `s_star + s_prime == 0` means the alternative coincides with both
///   reference points (only possible when every alternative is
///   identical on every criterion); rejected as
///   [`AnalysisError::DegenerateAlternative`] instead of yielding NaN.
pub fn rank(
    weighted: &WeightedMatrix,
    points: &IdealPoints,
    alternative_ids: &[String],
) -> Result<RankedResult, AnalysisError> {
    if alternative_ids.len() != weighted.alternative_count() {
        return Err(AnalysisError::ShapeMismatch {
            context: "alternative ids",
            expected: weighted.alternative_count(),
            actual: alternative_ids.len(),
        });
    }

    let mut entries = Vec::with_capacity(weighted.alternative_count());
    for (row, id) in weighted.rows().iter().zip(alternative_ids) {
        let s_star = euclidean_distance(row, points.ideal());
        let s_prime = euclidean_distance(row, points.anti_ideal());
        if s_star + s_prime == 0.0 {
            return Err(AnalysisError::DegenerateAlternative {
                alternative_id: id.clone(),
            });
        }
        entries.push(RankedAlternative {
            alternative_id: id.clone(),
            closeness: Closeness::new(s_prime / (s_star + s_prime)),
        });
    }

    // Vec::sort_by is stable, so equal indices keep input order.
    entries.sort_by(|a, b| {
        b.closeness
            .value()
            .partial_cmp(&a.closeness.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    debug!(alternatives = entries.len(), "ranking computed");

    Ok(RankedResult { entries })
}

fn euclidean_distance(row: &[f64], reference: &[f64]) -> f64 {
    row.iter()
        .zip(reference)
        .map(|(v, r)| (v - r) * (v - r))
        .sum::<f64>()
        .sqrt()
}
