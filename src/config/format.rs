//! Input table format configuration.

use serde::Deserialize;

use super::error::ConfigError;

/// Shape of the delimited input table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputFormat {
    /// Field delimiter between cells
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Decimal separator inside numeric cells, normalized to '.'
    /// before parsing
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Number of header/metadata lines before the weights row
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,
}

impl InputFormat {
    /// Validate the format options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::DelimiterNotAscii(self.delimiter));
        }
        if self.decimal_separator != ',' && self.decimal_separator != '.' {
            return Err(ConfigError::InvalidDecimalSeparator(self.decimal_separator));
        }
        if self.delimiter == self.decimal_separator {
            return Err(ConfigError::SeparatorClash(self.delimiter));
        }
        Ok(())
    }

    /// The delimiter as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

impl Default for InputFormat {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            decimal_separator: default_decimal_separator(),
            skip_rows: default_skip_rows(),
        }
    }
}

fn default_delimiter() -> char {
    ';'
}

fn default_decimal_separator() -> char {
    ','
}

fn default_skip_rows() -> usize {
    3
}
