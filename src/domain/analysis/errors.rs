//! Error types for the numeric analysis stages.

use thiserror::Error;

/// Errors that can occur while computing the ranking.
///
/// Both degenerate cases are hard errors rather than silent NaNs: a
/// zero-norm column cannot be normalized, and an alternative that
/// coincides with both ideal points has an undefined closeness index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("degenerate criterion column {column}: all scores are zero")]
    DegenerateCriterion { column: usize },

    #[error("degenerate alternative '{alternative_id}': coincides with both ideal points")]
    DegenerateAlternative { alternative_id: String },

    #[error("{context}: expected {expected} entries, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_criterion_displays_column() {
        let err = AnalysisError::DegenerateCriterion { column: 2 };
        assert_eq!(
            format!("{}", err),
            "degenerate criterion column 2: all scores are zero"
        );
    }

    #[test]
    fn degenerate_alternative_displays_id() {
        let err = AnalysisError::DegenerateAlternative {
            alternative_id: "A".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "degenerate alternative 'A': coincides with both ideal points"
        );
    }

    #[test]
    fn shape_mismatch_displays_counts() {
        let err = AnalysisError::ShapeMismatch {
            context: "weights",
            expected: 3,
            actual: 2,
        };
        assert_eq!(format!("{}", err), "weights: expected 3 entries, got 2");
    }
}
