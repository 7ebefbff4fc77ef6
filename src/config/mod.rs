//! Run configuration.
//!
//! The only configurable surface is the shape of the input table; it
//! is populated from CLI flags and validated before any file is read.

mod error;
mod format;

pub use error::ConfigError;
pub use format::InputFormat;
