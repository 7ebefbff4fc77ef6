//! topsis-rank - Batch TOPSIS ranking of decision alternatives.
//!
//! Reads a delimited table of alternatives x criteria scores, a
//! weights row, and a criteria-signs row; validates it; normalizes and
//! weights the matrix; resolves the ideal and anti-ideal reference
//! points; and writes a spreadsheet of alternatives ranked descending
//! by closeness index.

pub mod cli;
pub mod config;
pub mod domain;
pub mod input;
pub mod report;
