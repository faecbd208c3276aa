//! Error types for candidate solutions

use crate::common::SolutionKind;
use thiserror::Error;

/// Errors raised by [`Solution`](crate::Solution) operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolutionError {
    /// Speed vector length differs from the parameter vector length
    #[error("Arity mismatch: expected {expected} speeds, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// A variant converted its parameters into a structure tagged for another variant
    #[error("Type mismatch: solution is {expected} but converted parameters are tagged {found}")]
    TypeMismatch {
        expected: SolutionKind,
        found: SolutionKind,
    },
}

pub type SolutionResult<T> = Result<T, SolutionError>;
