//! CLI surface: argument parsing and run orchestration.

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, InputFormat};
use crate::domain::analysis::{self, AnalysisError, RankedResult};
use crate::input::{self, LoadError};
use crate::report::{self, ReportError};

/// Rank decision alternatives with the TOPSIS method.
#[derive(Debug, Parser)]
#[command(name = "topsis-rank", version, about, long_about = None)]
pub struct Cli {
    /// Path to the delimited input table
    pub input: PathBuf,

    /// Directory for the ranking report (default: the input file's directory)
    pub output_dir: Option<PathBuf>,

    /// Field delimiter between cells
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,

    /// Decimal separator inside numeric cells
    #[arg(long, default_value_t = ',')]
    pub decimal_separator: char,

    /// Number of header lines before the weights row
    #[arg(long, default_value_t = 3)]
    pub skip_rows: usize,

    /// Also print the ranking as JSON to stdout
    #[arg(long)]
    pub json: bool,
}

/// Anything that can make a run fail with exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("input file does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("output directory does not exist: {0}")]
    OutputDirNotFound(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("failed to serialize ranking: {0}")]
    Json(#[from] serde_json::Error),
}

impl Cli {
    fn input_format(&self) -> InputFormat {
        InputFormat {
            delimiter: self.delimiter,
            decimal_separator: self.decimal_separator,
            skip_rows: self.skip_rows,
        }
    }

    fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf()
        })
    }
}

/// Runs the whole pipeline and returns the path of the written report.
///
/// No report is written when any earlier stage fails.
pub fn run(cli: &Cli) -> Result<PathBuf, CliError> {
    let format = cli.input_format();
    format.validate()?;

    if !cli.input.is_file() {
        return Err(CliError::InputNotFound(cli.input.clone()));
    }
    let output_dir = cli.output_dir();
    if !output_dir.is_dir() {
        return Err(CliError::OutputDirNotFound(output_dir));
    }

    let input = input::load(&cli.input, &format)?;
    let ranking = compute(&input)?;
    info!(alternatives = ranking.len(), "ranking complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    }

    let path = report::write_ranking(&ranking, &output_dir)?;
    Ok(path)
}

fn compute(input: &input::DecisionInput) -> Result<RankedResult, AnalysisError> {
    analysis::run(&input.matrix, &input.weights, &input.signs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("topsis-rank").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_the_input_format() {
        let cli = cli(&["scores.csv"]);
        let format = cli.input_format();
        assert_eq!(format, InputFormat::default());
        assert!(!cli.json);
    }

    #[test]
    fn flags_override_the_format() {
        let cli = cli(&[
            "scores.csv",
            "--delimiter",
            ",",
            "--decimal-separator",
            ".",
            "--skip-rows",
            "0",
        ]);
        let format = cli.input_format();
        assert_eq!(format.delimiter, ',');
        assert_eq!(format.decimal_separator, '.');
        assert_eq!(format.skip_rows, 0);
    }

    #[test]
    fn output_dir_defaults_to_input_parent() {
        let cli = cli(&["data/scores.csv"]);
        assert_eq!(cli.output_dir(), PathBuf::from("data"));
    }

    #[test]
    fn bare_filename_defaults_output_dir_to_cwd() {
        let cli = cli(&["scores.csv"]);
        assert_eq!(cli.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn explicit_output_dir_wins() {
        let cli = cli(&["data/scores.csv", "reports"]);
        assert_eq!(cli.output_dir(), PathBuf::from("reports"));
    }

    #[test]
    fn missing_input_is_an_argument_error() {
        let cli = cli(&["does-not-exist.csv"]);
        let err = run(&cli).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound(_)));
    }

    #[test]
    fn clashing_separators_are_rejected_before_io() {
        let cli = cli(&["does-not-exist.csv", "--delimiter", ","]);
        let err = run(&cli).unwrap_err();
        // Config validation runs first, so the missing file is not reached.
        assert!(matches!(err, CliError::Config(_)));
    }
}
