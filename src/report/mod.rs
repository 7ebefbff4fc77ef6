//! Report output - spreadsheet rendering of the ranked result.

mod error;
mod writer;

pub use error::ReportError;
pub use writer::{report_filename, write_ranking, write_ranking_to};
