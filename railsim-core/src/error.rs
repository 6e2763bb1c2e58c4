//! Typed errors returned by solvers and mutators

use crate::validate::ValidationErrors;
use thiserror::Error;

pub type TractionResult<T> = Result<T, TractionError>;

#[derive(Debug, Error)]
pub enum TractionError {
    /// Vehicle parameters or current mass violate an invariant
    #[error("invalid vehicle configuration\n{0}")]
    Configuration(#[from] ValidationErrors),
    /// Brake mode or operating mode outside the accepted set
    #[error("invalid mode: {0}")]
    InvalidMode(String),
    /// Zero speed reached a conversion that divides by speed
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    /// Negative, non-finite, or out-of-range speed passed to a solver
    #[error("invalid speed: {0}")]
    InvalidSpeed(String),
}
