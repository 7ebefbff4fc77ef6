//! Delimited input loader.
//!
//! Parses the fixed three-block layout (header lines, weights row,
//! signs row, matrix rows) into a validated [`DecisionInput`]. All
//! validation happens here; the numeric stages never see malformed
//! data.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::LoadError;
use crate::config::InputFormat;
use crate::domain::foundation::{CriterionSign, ValidationError};
use crate::domain::matrix::DecisionMatrix;
use crate::domain::weights::WeightVector;

/// Upper bound on input size, to keep memory use bounded on hostile
/// input.
pub const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// The validated triple the numeric pipeline runs on.
#[derive(Debug, Clone)]
pub struct DecisionInput {
    pub matrix: DecisionMatrix,
    pub weights: WeightVector,
    pub signs: Vec<CriterionSign>,
}

/// Loads and validates a decision table from a file.
///
/// Invalid byte sequences are replaced with U+FFFD rather than
/// aborting the read.
pub fn load(path: &Path, format: &InputFormat) -> Result<DecisionInput, LoadError> {
    let bytes = fs::read(path)?;
    if bytes.len() > MAX_INPUT_BYTES {
        return Err(LoadError::InputTooLarge {
            size: bytes.len(),
            limit: MAX_INPUT_BYTES,
        });
    }
    let text = String::from_utf8_lossy(&bytes);
    load_from_str(&text, format)
}

/// Loads and validates a decision table from already-decoded text.
pub fn load_from_str(text: &str, format: &InputFormat) -> Result<DecisionInput, LoadError> {
    let records = read_records(text, format)?;

    let mut rows = records.into_iter().skip(format.skip_rows);
    let weights_row = rows.next().ok_or(LoadError::Truncated {
        section: "weights row",
    })?;
    let signs_row = rows.next().ok_or(LoadError::Truncated {
        section: "criteria signs row",
    })?;
    let table_rows: Vec<Vec<String>> = rows.collect();
    if table_rows.is_empty() {
        return Err(LoadError::Truncated {
            section: "main table",
        });
    }

    let (alternative_ids, cell_grid) = trim_table(table_rows);
    let criterion_count = cell_grid.first().map_or(0, Vec::len);
    if criterion_count == 0 {
        return Err(LoadError::Truncated {
            section: "main table",
        });
    }

    let matrix = parse_matrix(alternative_ids, cell_grid, format)?;
    let weights = parse_weights(&weights_row, criterion_count, format)?;
    let signs = parse_signs(&signs_row, criterion_count)?;

    debug!(
        alternatives = matrix.alternative_count(),
        criteria = matrix.criterion_count(),
        "input loaded"
    );
    Ok(DecisionInput {
        matrix,
        weights,
        signs,
    })
}

/// Reads all non-blank records, trimming each field. A record whose
/// fields are all empty is a blank line or a wholly-empty artifact row
/// and is dropped, not treated as missing data.
fn read_records(text: &str, format: &InputFormat) -> Result<Vec<Vec<String>>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delimiter_byte())
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let fields: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();
        if fields.iter().all(String::is_empty) {
            continue;
        }
        records.push(fields);
    }
    Ok(records)
}

/// Splits matrix rows into identifiers and a rectangular cell grid,
/// dropping wholly-empty criterion columns (source-format artifacts).
fn trim_table(rows: Vec<Vec<String>>) -> (Vec<String>, Vec<Vec<String>>) {
    let width = rows
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .saturating_sub(1);

    let mut alternative_ids = Vec::with_capacity(rows.len());
    let mut grid = Vec::with_capacity(rows.len());
    for row in rows {
        let mut fields = row.into_iter();
        alternative_ids.push(fields.next().unwrap_or_default());
        let mut cells: Vec<String> = fields.collect();
        cells.resize(width, String::new());
        grid.push(cells);
    }

    let kept: Vec<usize> = (0..width)
        .filter(|&j| grid.iter().any(|row| !row[j].is_empty()))
        .collect();
    let grid = grid
        .into_iter()
        .map(|row| kept.iter().map(|&j| row[j].clone()).collect())
        .collect();

    (alternative_ids, grid)
}

fn parse_matrix(
    alternative_ids: Vec<String>,
    cell_grid: Vec<Vec<String>>,
    format: &InputFormat,
) -> Result<DecisionMatrix, LoadError> {
    let mut rows = Vec::with_capacity(cell_grid.len());
    for (i, cells) in cell_grid.iter().enumerate() {
        let mut row = Vec::with_capacity(cells.len());
        for (j, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                return Err(LoadError::MissingMatrixCell {
                    row: i + 1,
                    column: j + 1,
                });
            }
            let value = parse_number(cell.as_str(), format.decimal_separator).ok_or(
                LoadError::InvalidMatrixCell {
                    row: i + 1,
                    column: j + 1,
                },
            )?;
            row.push(value);
        }
        rows.push(row);
    }

    DecisionMatrix::new(alternative_ids, rows).map_err(LoadError::MatrixValidation)
}

fn parse_weights(
    weights_row: &[String],
    criterion_count: usize,
    format: &InputFormat,
) -> Result<WeightVector, LoadError> {
    // Field 0 is the row label; empty entries are format artifacts.
    let entries: Vec<&String> = weights_row
        .iter()
        .skip(1)
        .filter(|field| !field.is_empty())
        .collect();
    if entries.len() != criterion_count {
        return Err(LoadError::MissingWeights {
            expected: criterion_count,
            found: entries.len(),
        });
    }

    let mut values = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let value = parse_number(entry.as_str(), format.decimal_separator)
            .filter(|v| *v >= 0.0)
            .ok_or(LoadError::InvalidWeight {
                position: position + 1,
            })?;
        values.push(value);
    }

    WeightVector::try_new(values).map_err(|err| match err {
        ValidationError::UnnormalizedWeights { sum } => LoadError::WeightSum { sum },
        other => LoadError::WeightsValidation(other),
    })
}

fn parse_signs(signs_row: &[String], criterion_count: usize) -> Result<Vec<CriterionSign>, LoadError> {
    let entries: Vec<&String> = signs_row
        .iter()
        .skip(1)
        .filter(|field| !field.is_empty())
        .collect();
    if entries.len() != criterion_count {
        return Err(LoadError::MissingSigns {
            expected: criterion_count,
            found: entries.len(),
        });
    }

    entries
        .iter()
        .map(|entry| {
            CriterionSign::from_symbol(entry.as_str()).map_err(|_| LoadError::InvalidSign {
                symbol: entry.to_string(),
            })
        })
        .collect()
}

/// Parses a number after normalizing the decimal separator to '.'.
/// Returns None for anything non-numeric or non-finite.
fn parse_number(raw: &str, decimal_separator: char) -> Option<f64> {
    let normalized = raw.replace(decimal_separator, ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
TOPSIS input
generated 2024-03-01
;C1;C2
weights;0,5;0,5
signs;+;-
A;1;7
B;2;5
C;3;3
";

    fn format() -> InputFormat {
        InputFormat::default()
    }

    #[test]
    fn sample_loads_with_default_format() {
        let input = load_from_str(SAMPLE, &format()).unwrap();

        assert_eq!(input.matrix.alternative_count(), 3);
        assert_eq!(input.matrix.criterion_count(), 2);
        assert_eq!(input.matrix.alternative_ids(), &["A", "B", "C"]);
        assert_eq!(input.matrix.rows()[0], vec![1.0, 7.0]);
        assert_eq!(input.weights.as_slice(), &[0.5, 0.5]);
        assert_eq!(
            input.signs,
            vec![CriterionSign::Benefit, CriterionSign::Cost]
        );
    }

    #[test]
    fn decimal_commas_are_normalized() {
        let text = "h\nh\nh\nw;0,25;0,75\ns;+;+\nA;1,5;2,25\nB;3;4\n";
        let input = load_from_str(text, &format()).unwrap();

        assert_eq!(input.matrix.rows()[0], vec![1.5, 2.25]);
        assert_eq!(input.weights.as_slice(), &[0.25, 0.75]);
    }

    #[test]
    fn blank_lines_are_tolerated() {
        let text = "h\n\nh\nh\n\nw;0,5;0,5\ns;+;-\n\nA;1;7\nB;2;5\n\nC;3;3\n\n";
        let input = load_from_str(text, &format()).unwrap();
        assert_eq!(input.matrix.alternative_count(), 3);
    }

    #[test]
    fn wholly_empty_trailing_columns_are_dropped() {
        let text = "h\nh\nh\nw;0,5;0,5\ns;+;-\nA;1;7;;\nB;2;5;;\nC;3;3;;\n";
        let input = load_from_str(text, &format()).unwrap();
        assert_eq!(input.matrix.criterion_count(), 2);
    }

    #[test]
    fn wholly_empty_rows_are_dropped() {
        let text = "h\nh\nh\nw;0,5;0,5\ns;+;-\nA;1;7\n;;;\nB;2;5\nC;3;3\n;;\n";
        let input = load_from_str(text, &format()).unwrap();
        assert_eq!(input.matrix.alternative_count(), 3);
    }

    #[test]
    fn missing_cell_is_rejected_not_coerced() {
        let text = "h\nh\nh\nw;0,5;0,5\ns;+;-\nA;1;7\nB;;5\nC;3;3\n";
        let err = load_from_str(text, &format()).unwrap_err();

        assert!(matches!(err, LoadError::MissingMatrixCell { row: 2, column: 1 }));
        assert!(format!("{}", err).contains("missing data in main table"));
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let text = "h\nh\nh\nw;0,5;0,5\ns;+;-\nA;1;7\nB;two;5\nC;3;3\n";
        let err = load_from_str(text, &format()).unwrap_err();

        assert!(matches!(err, LoadError::InvalidMatrixCell { row: 2, column: 1 }));
        assert!(format!("{}", err).contains("invalid data in main table"));
    }

    #[test]
    fn weight_count_mismatch_is_rejected() {
        let text = "h\nh\nh\nw;0,5\ns;+;-\nA;1;7\nB;2;5\n";
        let err = load_from_str(text, &format()).unwrap_err();

        assert!(matches!(
            err,
            LoadError::MissingWeights { expected: 2, found: 1 }
        ));
        assert!(format!("{}", err).contains("missing data in weights"));
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        let text = "h\nh\nh\nw;half;0,5\ns;+;-\nA;1;7\nB;2;5\n";
        let err = load_from_str(text, &format()).unwrap_err();

        assert!(matches!(err, LoadError::InvalidWeight { position: 1 }));
        assert!(format!("{}", err).contains("invalid data type in weights"));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let text = "h\nh\nh\nw;-0,5;1,5\ns;+;-\nA;1;7\nB;2;5\n";
        let err = load_from_str(text, &format()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidWeight { position: 1 }));
    }

    #[test]
    fn weights_not_summing_to_one_are_rejected() {
        let text = "h\nh\nh\nw;0,4;0,4\ns;+;-\nA;1;7\nB;2;5\n";
        let err = load_from_str(text, &format()).unwrap_err();

        assert!(matches!(err, LoadError::WeightSum { .. }));
        assert!(format!("{}", err).contains("weights do not sum to 1"));
    }

    #[test]
    fn sign_count_mismatch_is_rejected() {
        let text = "h\nh\nh\nw;0,5;0,5\ns;+\nA;1;7\nB;2;5\n";
        let err = load_from_str(text, &format()).unwrap_err();

        assert!(matches!(
            err,
            LoadError::MissingSigns { expected: 2, found: 1 }
        ));
        assert!(format!("{}", err).contains("missing data in criteria signs"));
    }

    #[test]
    fn invalid_sign_symbol_is_rejected() {
        let text = "h\nh\nh\nw;0,5;0,5\ns;+;x\nA;1;7\nB;2;5\n";
        let err = load_from_str(text, &format()).unwrap_err();

        assert!(matches!(err, LoadError::InvalidSign { .. }));
        assert!(format!("{}", err).contains("invalid character in criteria signs"));
    }

    #[test]
    fn truncation_is_reported_per_section() {
        let err = load_from_str("h\nh\nh\n", &format()).unwrap_err();
        assert!(matches!(err, LoadError::Truncated {
            section: "weights row"
        }));

        let err = load_from_str("h\nh\nh\nw;0,5;0,5\n", &format()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Truncated {
                section: "criteria signs row"
            }
        ));

        let err = load_from_str("h\nh\nh\nw;0,5;0,5\ns;+;-\n", &format()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Truncated {
                section: "main table"
            }
        ));
    }

    #[test]
    fn alternate_delimiter_and_dot_decimals_work() {
        let fmt = InputFormat {
            delimiter: ',',
            decimal_separator: '.',
            skip_rows: 0,
        };
        let text = "w,0.5,0.5\ns,+,-\nA,1.5,7\nB,2,5\n";
        let input = load_from_str(text, &fmt).unwrap();

        assert_eq!(input.matrix.rows()[0], vec![1.5, 7.0]);
    }

    #[test]
    fn skip_rows_zero_starts_at_weights() {
        let fmt = InputFormat {
            skip_rows: 0,
            ..InputFormat::default()
        };
        let text = "w;1,0\ns;+\nA;1\nB;2\n";
        let input = load_from_str(text, &fmt).unwrap();

        assert_eq!(input.weights.as_slice(), &[1.0]);
        assert_eq!(input.matrix.alternative_count(), 2);
    }

    #[test]
    fn parse_number_normalizes_separator() {
        assert_eq!(parse_number("1,5", ','), Some(1.5));
        assert_eq!(parse_number("1.5", '.'), Some(1.5));
        assert_eq!(parse_number("1.5", ','), Some(1.5));
        assert_eq!(parse_number("abc", ','), None);
        assert_eq!(parse_number("inf", ','), None);
        assert_eq!(parse_number("nan", ','), None);
    }
}
