//! Ranking report writer.
//!
//! Produces the two-column spreadsheet (alternative identifier,
//! closeness index) sorted best first, under a timestamped filename.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use super::error::ReportError;
use crate::domain::analysis::RankedResult;

/// Builds the report filename with second-precision timestamp.
pub fn report_filename(now: DateTime<Local>) -> String {
    format!("ranking_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}

/// Writes the ranking into `output_dir` and returns the absolute path
/// of the written file.
pub fn write_ranking(ranking: &RankedResult, output_dir: &Path) -> Result<PathBuf, ReportError> {
    let path = output_dir.join(report_filename(Local::now()));
    write_ranking_to(ranking, &path)?;
    let absolute = path.canonicalize()?;
    info!(path = %absolute.display(), "ranking report written");
    Ok(absolute)
}

/// Writes the ranking workbook to an exact path.
pub fn write_ranking_to(ranking: &RankedResult, path: &Path) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("ranking")?;
    worksheet.write_string_with_format(0, 0, "alternative", &bold)?;
    worksheet.write_string_with_format(0, 1, "CI", &bold)?;

    for (i, entry) in ranking.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, entry.alternative_id.as_str())?;
        worksheet.write_number(row, 1, entry.closeness.value())?;
    }

    workbook.save(path)?;
    Ok(())
}
