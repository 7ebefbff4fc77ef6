//! Decision matrix types (raw scores and weighted normalized scores).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// The alternatives x criteria score matrix.
///
/// Rows are alternatives, columns are criteria. The matrix is
/// rectangular and every cell is a finite number; both properties are
/// enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    alternative_ids: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a decision matrix from alternative identifiers and score rows.
    pub fn new(alternative_ids: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        if alternative_ids.len() != rows.len() {
            return Err(ValidationError::length_mismatch(
                "alternative_ids",
                rows.len(),
                alternative_ids.len(),
            ));
        }
        let criterion_count = rows.first().map_or(0, Vec::len);
        for row in &rows {
            if row.len() != criterion_count {
                return Err(ValidationError::length_mismatch(
                    "row",
                    criterion_count,
                    row.len(),
                ));
            }
            for cell in row {
                if !cell.is_finite() {
                    return Err(ValidationError::not_finite("cell"));
                }
            }
        }
        Ok(Self {
            alternative_ids,
            rows,
        })
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the ordered alternative identifiers.
    pub fn alternative_ids(&self) -> &[String] {
        &self.alternative_ids
    }

    /// Returns the score rows in input order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns an iterator over the values of criterion column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[j])
    }
}

/// The normalized, weight-scaled matrix derived from a [`DecisionMatrix`].
///
/// Same shape as the source matrix; produced exclusively by the
/// normalizer so its cells are always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMatrix {
    rows: Vec<Vec<f64>>,
}

impl WeightedMatrix {
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the weighted rows in input order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns an iterator over the values of criterion column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[j])
    }
}
