//! Error types for the solver.
//!
//! Only configuration problems are surfaced. Numerical edge cases
//! (near-zero samples during initialization, coincident points during force
//! evaluation) are absorbed where they occur, and hitting the iteration cap is
//! reported through [`crate::Solution::converged`] rather than as an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThomsonError {
    /// Rejected before any simulation work is done
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ThomsonError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ThomsonError::InvalidConfiguration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ThomsonError>;
