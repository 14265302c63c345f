//! Closed-form 3×3 linear algebra routines.
//!
//! - [`dyadic`]: outer product of two vectors
//! - [`determinant`]: triple-product expansion
//! - [`inverse`]: adjugate divided by the determinant
//! - [`rodrigues`]: rotation matrix from an axis-angle vector

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::expr::nodes::Outer;
use crate::expr::{MatExpr, MatrixExpr, MatrixOperand, VectorExpr, VectorOperand};
use crate::matrix::Matrix;
use crate::scalar::{Real, SINGULARITY_TOLERANCE};
use crate::vector::Vector;

/// Outer product `g ⊗ h`, with entry (i, j) equal to `g[i] * h[j]`.
///
/// The result is a deferred matrix expression; bind it with `eval()` or `Matrix::from`.
#[inline]
pub fn dyadic<G: VectorOperand, H: VectorOperand>(g: G, h: H) -> MatExpr<Outer<G::Expr, H::Expr>> {
    MatExpr::new(Outer::new(g.into_vector_expr(), h.into_vector_expr()))
}

/// Determinant by expansion along the first row.
pub fn determinant(m: &Matrix) -> Real {
    m.xx * (m.yy * m.zz - m.yz * m.zy) - m.xy * (m.yx * m.zz - m.yz * m.zx)
        + m.xz * (m.yx * m.zy - m.yy * m.zx)
}

/// Inverse of `m` using [`SINGULARITY_TOLERANCE`].
///
/// # Errors
///
/// Returns [`Error::SingularMatrix`] when the determinant is negligible compared with the
/// product of the row norms, and [`Error::NonFiniteDeterminant`] when it is NaN or infinite.
pub fn inverse<M: MatrixOperand>(m: M) -> Result<Matrix> {
    inverse_with_tolerance(m, SINGULARITY_TOLERANCE)
}

/// Inverse of `m`, rejecting it when `|det| <= tolerance * ‖r0‖·‖r1‖·‖r2‖`.
///
/// # Errors
///
/// See [`inverse`].
pub fn inverse_with_tolerance<M: MatrixOperand>(m: M, tolerance: Real) -> Result<Matrix> {
    let m = m.into_matrix_expr().eval();
    let det = determinant(&m);

    if !det.is_finite() {
        debug!(determinant = det, "refusing to invert matrix with non-finite determinant");
        return Err(Error::NonFiniteDeterminant { determinant: det });
    }

    let scale = m.row(0).norm() * m.row(1).norm() * m.row(2).norm();
    if det.abs() <= tolerance * scale {
        debug!(
            determinant = det,
            scale, tolerance, "refusing to invert near-singular matrix"
        );
        return Err(Error::SingularMatrix { determinant: det });
    }

    // Transposed cofactors, each divided by the determinant.
    Ok(Matrix::new(
        (m.yy * m.zz - m.yz * m.zy) / det,
        (m.xz * m.zy - m.xy * m.zz) / det,
        (m.xy * m.yz - m.xz * m.yy) / det,
        (m.yz * m.zx - m.yx * m.zz) / det,
        (m.xx * m.zz - m.xz * m.zx) / det,
        (m.xz * m.yx - m.xx * m.yz) / det,
        (m.yx * m.zy - m.yy * m.zx) / det,
        (m.xy * m.zx - m.xx * m.zy) / det,
        (m.xx * m.yy - m.xy * m.yx) / det,
    ))
}

/// Rotation matrix for the axis-angle vector `v`.
///
/// The rotation angle is `θ = ‖v‖` and the axis is `v / θ`:
///
/// `R = I cos θ + K sin θ + (1 - cos θ) axis ⊗ axis`
///
/// where `K` is the cross-product matrix of the axis. A zero vector yields the identity.
pub fn rodrigues<V: VectorOperand>(v: V) -> Matrix {
    let v: Vector = v.into_vector_expr().eval();
    let angle = v.norm();
    if angle == 0.0 {
        trace!("zero rotation vector, returning identity");
        return Matrix::identity();
    }

    let axis: Vector = (&v / angle).into();
    let (sin, cos) = angle.sin_cos();
    (cos * Matrix::identity() + sin * cross_matrix(&axis) + (1.0 - cos) * dyadic(&axis, &axis))
        .eval()
}

/// Skew-symmetric `K` with `K * w == a ^ w` for every `w`.
#[rustfmt::skip]
fn cross_matrix(a: &Vector) -> Matrix {
    Matrix::new(
        0.0, -a.z,  a.y,
        a.z,  0.0, -a.x,
       -a.y,  a.x,  0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::TEST_EPSILON;
    use crate::scalar::consts::PI;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_dyadic() {
        let g = Vector::new(-1.0, 2.0, 3.0);
        let h = Vector::new(1.0, 3.0, 6.0);
        let mut f = Matrix::uninitialized();
        f.assign(dyadic(&g, &h));
        assert_eq!(
            f,
            Matrix::new(-1.0, -3.0, -6.0, 2.0, 6.0, 12.0, 3.0, 9.0, 18.0)
        );
    }

    #[test]
    fn test_determinant() {
        let a = Matrix::new(-1.0, 2.0, 3.0, 3.0, 2.0, 3.0, 1.0, 3.0, 1.0);
        assert_eq!(determinant(&a), 28.0);
        assert_eq!(determinant(&Matrix::identity()), 1.0);
    }

    #[test]
    fn test_inverse_reference_values() {
        let a = Matrix::new(-1.0, 2.0, 3.0, 3.0, 2.0, 3.0, 1.0, 3.0, 1.0);
        let b = inverse(&a).expect("matrix is invertible");
        assert_relative_eq!(b.xx, -1.0 / 4.0, max_relative = TEST_EPSILON);
        assert_relative_eq!(b.xy, 1.0 / 4.0, max_relative = TEST_EPSILON);
        assert_eq!(b.xz, 0.0);
        assert_eq!(b.yx, 0.0);
        assert_relative_eq!(b.yy, -1.0 / 7.0, max_relative = TEST_EPSILON);
        assert_relative_eq!(b.yz, 3.0 / 7.0, max_relative = TEST_EPSILON);
        assert_relative_eq!(b.zx, 1.0 / 4.0, max_relative = TEST_EPSILON);
        assert_relative_eq!(b.zy, 5.0 / 28.0, max_relative = TEST_EPSILON);
        assert_relative_eq!(b.zz, -2.0 / 7.0, max_relative = TEST_EPSILON);
    }

    #[test]
    fn test_inverse_of_expression() {
        let a = Matrix::new(2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 8.0);
        let b = inverse(2.0 * &a).expect("diagonal matrix is invertible");
        assert_eq!(b, Matrix::new(0.25, 0.0, 0.0, 0.0, 0.125, 0.0, 0.0, 0.0, 0.0625));
    }

    #[test]
    fn test_inverse_rejects_singular() {
        let a = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let err = inverse(&a).unwrap_err();
        assert!(matches!(err, Error::SingularMatrix { .. }));

        let zero = Matrix::from_element(0.0);
        assert_eq!(
            inverse(zero),
            Err(Error::SingularMatrix { determinant: 0.0 })
        );
    }

    #[test]
    fn test_inverse_rejects_non_finite() {
        let mut a = Matrix::identity();
        a.yy = Real::NAN;
        assert!(matches!(
            inverse(a),
            Err(Error::NonFiniteDeterminant { .. })
        ));
    }

    #[test]
    fn test_inverse_tolerance_is_scale_invariant() {
        let a = Matrix::new(-1.0, 2.0, 3.0, 3.0, 2.0, 3.0, 1.0, 3.0, 1.0);
        let tiny: Matrix = (&a * 1e-8).into();
        let inv = inverse(&tiny).expect("uniformly scaled matrix is still invertible");
        let product: Matrix = (&tiny * &inv).into();
        assert_abs_diff_eq!(product, Matrix::identity(), epsilon = TEST_EPSILON);
    }

    #[test]
    fn test_inverse_accepts_badly_scaled_diagonal() {
        let diag = Matrix::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1e-20);
        let inv = inverse(&diag).expect("diagonal matrix is invertible");
        assert_relative_eq!(inv.zz, 1e20, max_relative = TEST_EPSILON);
    }

    #[test]
    fn test_inverse_custom_tolerance() {
        // Third row is almost in the plane of the first two
        let nearly = Matrix::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1e-4);
        assert!(inverse(&nearly).is_ok());
        assert!(inverse_with_tolerance(&nearly, 1e-3).is_err());
    }

    #[test]
    fn test_rodrigues_reference_values() {
        let d = Vector::new(1.0, 1.0, 1.0);
        let n: Vector = (&d / d.norm()).into();
        let r = rodrigues((PI / 2.0) * &n);

        let sqrt3 = Real::sqrt(3.0);
        let third = 1.0 / 3.0;
        let lo = (1.0 - sqrt3) / 3.0;
        let hi = (1.0 + sqrt3) / 3.0;
        assert_relative_eq!(r.xx, third, max_relative = TEST_EPSILON);
        assert_relative_eq!(r.xy, lo, max_relative = TEST_EPSILON);
        assert_relative_eq!(r.xz, hi, max_relative = TEST_EPSILON);
        assert_relative_eq!(r.yx, hi, max_relative = TEST_EPSILON);
        assert_relative_eq!(r.yy, third, max_relative = TEST_EPSILON);
        assert_relative_eq!(r.yz, lo, max_relative = TEST_EPSILON);
        assert_relative_eq!(r.zx, lo, max_relative = TEST_EPSILON);
        assert_relative_eq!(r.zy, hi, max_relative = TEST_EPSILON);
        assert_relative_eq!(r.zz, third, max_relative = TEST_EPSILON);
    }

    #[test]
    fn test_rodrigues_zero_vector_is_identity() {
        assert_eq!(rodrigues(Vector::from_element(0.0)), Matrix::identity());
    }

    #[test]
    fn test_rodrigues_rotates_about_z() {
        let r = rodrigues(Vector::new(0.0, 0.0, PI / 2.0));
        let rotated: Vector = (&r * Vector::new(1.0, 0.0, 0.0)).into();
        assert_abs_diff_eq!(rotated, Vector::new(0.0, 1.0, 0.0), epsilon = TEST_EPSILON);
    }

    #[test]
    fn test_cross_matrix_matches_cross_product() {
        let a = Vector::new(0.3, -1.2, 2.0);
        let w = Vector::new(1.5, 0.5, -0.25);
        let via_matrix: Vector = (&cross_matrix(&a) * &w).into();
        assert_relative_eq!(via_matrix, a.cross(&w), max_relative = TEST_EPSILON);
    }
}
