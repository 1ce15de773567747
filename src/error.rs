//! Error types for the life engine.

use thiserror::Error;

/// Errors surfaced by grid construction, editing, seeding and import.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    /// Grid requested with a zero row or column count
    #[error("Invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Coordinate outside `[0, rows) x [0, cols)`
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Seeding probability outside `[0, 1]`
    #[error("Invalid density: {0} (expected a value in [0, 1])")]
    InvalidDensity(f64),

    /// The pattern source could not produce a usable pattern
    #[error("Pattern generation failed: {0}")]
    PatternGenerationFailure(String),
}

impl LifeError {
    /// Creates a pattern generation failure.
    pub fn pattern_failure(msg: impl Into<String>) -> Self {
        Self::PatternGenerationFailure(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
