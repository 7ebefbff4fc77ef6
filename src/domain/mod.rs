//! Domain model for TOPSIS ranking.
//!
//! `foundation` holds the shared value objects, `matrix` and `weights`
//! the validated input entities, and `analysis` the pure numeric
//! pipeline that turns them into a ranked result.

pub mod analysis;
pub mod foundation;
pub mod matrix;
pub mod weights;
