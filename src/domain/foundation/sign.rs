//! Criterion sign value object (benefit "+" / cost "-").

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Optimization direction of a criterion column.
///
/// A benefit criterion prefers higher raw scores, a cost criterion
/// prefers lower ones. Parsed once during loading from the literal
/// symbols "+" and "-"; every later stage dispatches on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionSign {
    Benefit,
    Cost,
}

impl CriterionSign {
    /// Parses a sign from its symbol, returning error for anything
    /// other than exactly "+" or "-".
    pub fn from_symbol(symbol: &str) -> Result<Self, ValidationError> {
        match symbol {
            "+" => Ok(CriterionSign::Benefit),
            "-" => Ok(CriterionSign::Cost),
            other => Err(ValidationError::invalid_symbol("sign", other)),
        }
    }

    /// Returns the symbol used in input files.
    pub fn symbol(&self) -> &'static str {
        match self {
            CriterionSign::Benefit => "+",
            CriterionSign::Cost => "-",
        }
    }

    /// Returns true for a benefit criterion.
    pub fn is_benefit(&self) -> bool {
        matches!(self, CriterionSign::Benefit)
    }
}

impl fmt::Display for CriterionSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
