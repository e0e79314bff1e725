// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Every failure in the algebraic core is immediate and non-recoverable:
/// it aborts the current top-level operation and propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("term degree must be non-negative, got {0}")]
    NegativeDegree(i64),

    #[error("cannot add terms of degree {0} and {1}")]
    DegreeMismatch(usize, usize),

    #[error("cannot divide a term of degree {0} by one of degree {1}")]
    TermDivisionDegree(usize, usize),

    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    #[error("{0} has no inverse mod {1} because {1} divides {0}")]
    NotInvertible(i64, i64),

    #[error("cannot divide by the zero polynomial")]
    DivisionByZero,

    #[error("leading coefficient is a multiple of the chosen prime {0}")]
    UnsuitablePrime(i64),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("internal consistency failure: {0}")]
    Internal(&'static str),
}
