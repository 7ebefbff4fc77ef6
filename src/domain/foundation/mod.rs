//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the ranking domain.

mod closeness;
mod errors;
mod sign;

pub use closeness::Closeness;
pub use errors::ValidationError;
pub use sign::CriterionSign;
