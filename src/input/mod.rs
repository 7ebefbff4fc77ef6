//! Input loading - delimited table parsing and validation.

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{load, load_from_str, DecisionInput, MAX_INPUT_BYTES};
