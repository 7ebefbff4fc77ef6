//! Analysis module - Pure numeric stages of the TOPSIS pipeline.
//!
//! All functions here are pure and deterministic: they take validated
//! domain objects and return computed results, with every degenerate
//! numeric case surfaced as an error instead of a NaN.
//!
//! # Stages
//!
//! - `normalizer` - unit-length column rescaling plus weighting
//! - `ideal` - positive/negative ideal reference points
//! - `ranker` - closeness indices and the final descending order

mod errors;
mod ideal;
mod normalizer;
mod ranker;

pub use errors::AnalysisError;
pub use ideal::IdealPoints;
pub use normalizer::normalize;
pub use ranker::{rank, RankedAlternative, RankedResult};

use crate::domain::foundation::CriterionSign;
use crate::domain::matrix::DecisionMatrix;
use crate::domain::weights::WeightVector;

/// Runs the full numeric pipeline: normalize, resolve ideal points,
/// rank by closeness.
pub fn run(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    signs: &[CriterionSign],
) -> Result<RankedResult, AnalysisError> {
    let weighted = normalize(matrix, weights)?;
    let points = IdealPoints::resolve(&weighted, signs)?;
    rank(&weighted, &points, matrix.alternative_ids())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_input() -> (DecisionMatrix, WeightVector, Vec<CriterionSign>) {
        let matrix = DecisionMatrix::new(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec![vec![1.0, 7.0], vec![2.0, 5.0], vec![3.0, 3.0]],
        )
        .unwrap();
        let weights = WeightVector::try_new(vec![0.5, 0.5]).unwrap();
        let signs = vec![CriterionSign::Benefit, CriterionSign::Cost];
        (matrix, weights, signs)
    }

    #[test]
    fn highest_benefit_lowest_cost_ranks_first() {
        let (matrix, weights, signs) = spec_input();
        let result = run(&matrix, &weights, &signs).unwrap();

        // C has the best score on the benefit column and the lowest on
        // the cost column, so it must win outright.
        assert_eq!(result.entries()[0].alternative_id, "C");
        assert_eq!(result.entries()[0].closeness.value(), 1.0);
        assert_eq!(result.entries()[2].alternative_id, "A");
    }

    #[test]
    fn pipeline_is_idempotent() {
        let (matrix, weights, signs) = spec_input();
        let first = run(&matrix, &weights, &signs).unwrap();
        let second = run(&matrix, &weights, &signs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_column_error_propagates() {
        let matrix = DecisionMatrix::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![1.0, 0.0], vec![2.0, 0.0]],
        )
        .unwrap();
        let weights = WeightVector::try_new(vec![0.5, 0.5]).unwrap();
        let signs = vec![CriterionSign::Benefit, CriterionSign::Benefit];

        let result = run(&matrix, &weights, &signs);
        assert_eq!(result, Err(AnalysisError::DegenerateCriterion { column: 1 }));
    }
}
