//! Error types for the linear algebra routines.
//!
//! Arithmetic operators never fail. The only operation with a failure mode is matrix
//! inversion, which reports a domain error instead of returning a meaningless matrix.

use thiserror::Error;

use crate::scalar::Real;

/// Domain errors reported by [`inverse`](crate::inverse).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Determinant is too small relative to the matrix scale to invert reliably.
    #[error("matrix is singular or near-singular (determinant {determinant})")]
    SingularMatrix { determinant: Real },

    /// Determinant is NaN or infinite, usually from non-finite input components.
    #[error("matrix determinant is not finite ({determinant})")]
    NonFiniteDeterminant { determinant: Real },
}

/// Result type for fallible linear algebra routines.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_determinant() {
        let err = Error::SingularMatrix { determinant: 0.0 };
        assert_eq!(
            err.to_string(),
            "matrix is singular or near-singular (determinant 0)"
        );

        let err = Error::NonFiniteDeterminant {
            determinant: Real::NAN,
        };
        assert!(err.to_string().contains("NaN"));
    }
}
