//! Error types for report writing.

use thiserror::Error;

/// Errors raised while writing the ranking report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to resolve report path: {0}")]
    Path(#[from] std::io::Error),
}
