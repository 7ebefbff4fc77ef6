//! Configuration error types.

use thiserror::Error;

/// Errors raised by input-format validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field delimiter must be a single ASCII character, got '{0}'")]
    DelimiterNotAscii(char),

    #[error("field delimiter and decimal separator must differ, both are '{0}'")]
    SeparatorClash(char),

    #[error("decimal separator must be ',' or '.', got '{0}'")]
    InvalidDecimalSeparator(char),
}
