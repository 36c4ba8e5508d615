//! Error types shared by the board model, the population and the runner.

use thiserror::Error;

/// Errors raised while configuring or running the N-Queens search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueensError {
    /// A configuration parameter is out of range. Reported by
    /// [`GaConfig::validate`](crate::ga::GaConfig::validate) before the
    /// first generation runs.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A board has the wrong length for the configured size.
    #[error("Invariant violation: board has {actual} columns, expected {expected}")]
    BoardLength { expected: usize, actual: usize },

    /// A board holds a row index outside `[0, size)`.
    #[error("Invariant violation: column {column} holds row {row}, board size is {size}")]
    RowOutOfRange {
        column: usize,
        row: usize,
        size: usize,
    },

    /// Fitness was read before the individual was evaluated.
    #[error("fitness read before evaluation")]
    FitnessNotEvaluated,
}

impl QueensError {
    /// Returns `true` for malformed-board errors detected at evaluation.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            QueensError::BoardLength { .. } | QueensError::RowOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QueensError>;
