//! Build-wide scalar configuration.
//!
//! Every component of every [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix) in a build
//! uses the same scalar type. The choice is made at compile time with the
//! `single-precision` cargo feature:
//!
//! - default: `Real = f64`
//! - `--features single-precision`: `Real = f32`

/// Scalar type shared by all components.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Scalar type shared by all components.
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// Mathematical constants for the configured [`Real`].
#[cfg(not(feature = "single-precision"))]
pub use std::f64::consts;

/// Mathematical constants for the configured [`Real`].
#[cfg(feature = "single-precision")]
pub use std::f32::consts;

/// Relative singularity threshold used by [`inverse`](crate::inverse).
///
/// A matrix is rejected when `|det| <= SINGULARITY_TOLERANCE * ‖r0‖·‖r1‖·‖r2‖`, where the
/// right-hand product is the Hadamard bound on the determinant. The test is invariant under
/// uniform scaling of the matrix.
#[cfg(not(feature = "single-precision"))]
pub const SINGULARITY_TOLERANCE: Real = 1e-12;

/// Relative singularity threshold used by [`inverse`](crate::inverse).
#[cfg(feature = "single-precision")]
pub const SINGULARITY_TOLERANCE: Real = 1e-6;

/// Comparison tolerance for unit tests, wide enough for either precision.
#[cfg(test)]
pub(crate) const TEST_EPSILON: Real = 1e4 * Real::EPSILON;
