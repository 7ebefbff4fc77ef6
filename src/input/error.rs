//! Error types for input loading and validation.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while parsing and validating the input table.
///
/// Each validation failure is a distinct condition naming the block it
/// was found in (main table, weights, criteria signs), so the CLI can
/// report it as a single line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input file: {0}")]
    Read(#[from] std::io::Error),

    #[error("input file too large: {size} bytes (limit {limit})")]
    InputTooLarge { size: usize, limit: usize },

    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("input ends before the {section}")]
    Truncated { section: &'static str },

    #[error("invalid data in main table (row {row}, column {column})")]
    InvalidMatrixCell { row: usize, column: usize },

    #[error("missing data in main table (row {row}, column {column})")]
    MissingMatrixCell { row: usize, column: usize },

    #[error("invalid data in main table ({0})")]
    MatrixValidation(ValidationError),

    #[error("missing data in weights (expected {expected}, found {found})")]
    MissingWeights { expected: usize, found: usize },

    #[error("invalid data type in weights (position {position})")]
    InvalidWeight { position: usize },

    #[error("invalid data type in weights ({0})")]
    WeightsValidation(ValidationError),

    #[error("weights do not sum to 1 (sum is {sum})")]
    WeightSum { sum: f64 },

    #[error("missing data in criteria signs (expected {expected}, found {found})")]
    MissingSigns { expected: usize, found: usize },

    #[error("invalid character in criteria signs ('{symbol}')")]
    InvalidSign { symbol: String },
}
