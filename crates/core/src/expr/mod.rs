//! Deferred-evaluation arithmetic engine.
//!
//! Arithmetic operators on [`Vector`] and [`Matrix`] return lightweight expression nodes
//! instead of computed aggregates. A chain such as `&a * &x + &y` builds a tree of
//! [`nodes`] that borrows (or copies) its operands; nothing is computed until the tree is
//! bound to a destination with [`VecExpr::eval`], `Vector::from`, [`Vector::assign`], a
//! compound assignment operator, or the matrix equivalents.
//!
//! At the binding point every destination component is computed straight from the operand
//! components it depends on, so evaluating a chain of any length needs no storage beyond the
//! operands and the destination. Each node evaluates its formula in the same order as the
//! eager, parenthesised algebraic expression, so results match naive evaluation bit for bit.
//!
//! # Aliasing
//!
//! Expression nodes hold shared borrows of their operands, so binding an expression into an
//! aggregate it reads from is rejected at compile time:
//!
//! ```compile_fail
//! use vecmat3_core::Matrix;
//!
//! let mut x = Matrix::identity();
//! let y = Matrix::identity();
//! x.assign(&x * &y);
//! ```
//!
//! Evaluating into a fresh value (`x = (&x * &y).eval()`) or multiplying in place with
//! `x *= &y` are both fine; the latter buffers the old `x` before overwriting it.

pub mod nodes;
mod ops;

use crate::matrix::Matrix;
use crate::scalar::Real;
use crate::vector::Vector;

/// Anything that can produce the three components of a vector on demand.
pub trait VectorExpr {
    /// Component `i` of the value this expression denotes.
    fn component(&self, i: usize) -> Real;

    /// Evaluate all three components into a new [`Vector`].
    #[inline]
    fn eval(&self) -> Vector {
        Vector::new(self.component(0), self.component(1), self.component(2))
    }
}

/// Anything that can produce the nine entries of a matrix on demand.
pub trait MatrixExpr {
    /// Entry (`row`, `col`) of the value this expression denotes.
    fn entry(&self, row: usize, col: usize) -> Real;

    /// Evaluate all nine entries into a new [`Matrix`].
    #[inline]
    fn eval(&self) -> Matrix {
        let mut m = Matrix::uninitialized();
        for (i, row) in m.as_rows_mut().iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.entry(i, j);
            }
        }
        m
    }
}

impl VectorExpr for Vector {
    #[inline]
    fn component(&self, i: usize) -> Real {
        self[i]
    }
}

impl MatrixExpr for Matrix {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        self[(row, col)]
    }
}

impl<E: VectorExpr + ?Sized> VectorExpr for &E {
    #[inline]
    fn component(&self, i: usize) -> Real {
        (**self).component(i)
    }
}

impl<E: MatrixExpr + ?Sized> MatrixExpr for &E {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        (**self).entry(row, col)
    }
}

/// An unevaluated vector-valued expression.
///
/// Returned by the arithmetic operators; bind it with [`eval`](Self::eval), `Vector::from`
/// or [`Vector::assign`].
#[derive(Debug, Clone, Copy)]
#[must_use = "expressions are lazy and do nothing until evaluated"]
pub struct VecExpr<E>(E);

/// An unevaluated matrix-valued expression.
///
/// Returned by the arithmetic operators and [`dyadic`](crate::dyadic); bind it with
/// [`eval`](Self::eval), `Matrix::from` or [`Matrix::assign`].
///
/// Reading an entry of a product recomputes the entries of its operands, so each extra
/// unevaluated factor in `&a * &b * &c * ...` triples the work per entry. Bind long product
/// chains partway with `.eval()`:
///
/// ```
/// use vecmat3_core::Matrix;
///
/// let a = Matrix::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
/// let (b, c, d) = (a, a, a);
/// let ab = (&a * &b).eval();
/// let abcd = (&ab * (&c * &d).eval()).eval();
/// assert_eq!(abcd, (&a * &b * &c * &d).eval());
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use = "expressions are lazy and do nothing until evaluated"]
pub struct MatExpr<E>(E);

impl<E: VectorExpr> VecExpr<E> {
    #[inline]
    pub(crate) fn new(expr: E) -> Self {
        VecExpr(expr)
    }

    /// Evaluate into a new [`Vector`].
    #[inline]
    pub fn eval(&self) -> Vector {
        self.0.eval()
    }

    /// Compute a single component without evaluating the others.
    #[inline]
    pub fn component(&self, i: usize) -> Real {
        self.0.component(i)
    }
}

impl<E: MatrixExpr> MatExpr<E> {
    #[inline]
    pub(crate) fn new(expr: E) -> Self {
        MatExpr(expr)
    }

    /// Evaluate into a new [`Matrix`].
    #[inline]
    pub fn eval(&self) -> Matrix {
        self.0.eval()
    }

    /// Compute a single entry without evaluating the others.
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> Real {
        self.0.entry(row, col)
    }

    /// Evaluate only row `i`, e.g. `(&a * &b).row(1)`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector {
        Vector::new(self.entry(i, 0), self.entry(i, 1), self.entry(i, 2))
    }

    /// Evaluate only column `j`.
    #[inline]
    pub fn column(&self, j: usize) -> Vector {
        Vector::new(self.entry(0, j), self.entry(1, j), self.entry(2, j))
    }
}

impl<E: VectorExpr> VectorExpr for VecExpr<E> {
    #[inline]
    fn component(&self, i: usize) -> Real {
        self.0.component(i)
    }
}

impl<E: MatrixExpr> MatrixExpr for MatExpr<E> {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        self.0.entry(row, col)
    }
}

impl<E: VectorExpr> From<VecExpr<E>> for Vector {
    #[inline]
    fn from(expr: VecExpr<E>) -> Self {
        expr.eval()
    }
}

impl<E: MatrixExpr> From<MatExpr<E>> for Matrix {
    #[inline]
    fn from(expr: MatExpr<E>) -> Self {
        expr.eval()
    }
}

/// A value usable as a vector operand: a [`Vector`], a `&Vector`, or a [`VecExpr`].
pub trait VectorOperand {
    type Expr: VectorExpr;

    /// Unwrap into the expression tree this operand contributes.
    fn into_vector_expr(self) -> Self::Expr;
}

/// A value usable as a matrix operand: a [`Matrix`], a `&Matrix`, or a [`MatExpr`].
pub trait MatrixOperand {
    type Expr: MatrixExpr;

    /// Unwrap into the expression tree this operand contributes.
    fn into_matrix_expr(self) -> Self::Expr;
}

impl VectorOperand for Vector {
    type Expr = Vector;

    #[inline]
    fn into_vector_expr(self) -> Vector {
        self
    }
}

impl<'a> VectorOperand for &'a Vector {
    type Expr = &'a Vector;

    #[inline]
    fn into_vector_expr(self) -> &'a Vector {
        self
    }
}

impl<E: VectorExpr> VectorOperand for VecExpr<E> {
    type Expr = E;

    #[inline]
    fn into_vector_expr(self) -> E {
        self.0
    }
}

impl MatrixOperand for Matrix {
    type Expr = Matrix;

    #[inline]
    fn into_matrix_expr(self) -> Matrix {
        self
    }
}

impl<'a> MatrixOperand for &'a Matrix {
    type Expr = &'a Matrix;

    #[inline]
    fn into_matrix_expr(self) -> &'a Matrix {
        self
    }
}

impl<E: MatrixExpr> MatrixOperand for MatExpr<E> {
    type Expr = E;

    #[inline]
    fn into_matrix_expr(self) -> E {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::TEST_EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn test_chain_matches_eager_evaluation() {
        let a = Matrix::new(1.0, 2.0, 3.0, -1.0, 2.0, -1.0, 0.0, 0.0, 1.0);
        let x = Vector::new(3.0, 0.0, 1.0);
        let y = Vector::new(0.5, -0.25, 2.0);

        let lazy: Vector = (&a * &x + &y).into();

        let ax = Vector::new(
            a.xx * x.x + a.xy * x.y + a.xz * x.z,
            a.yx * x.x + a.yy * x.y + a.yz * x.z,
            a.zx * x.x + a.zy * x.y + a.zz * x.z,
        );
        let eager = Vector::new(ax.x + y.x, ax.y + y.y, ax.z + y.z);
        assert_eq!(lazy, eager);
    }

    #[test]
    fn test_scalar_multiply_vector() {
        let c = Vector::new(-1.0, 2.2, 3.1);
        let mut d = Vector::uninitialized();
        d.assign(2.4 * &c);
        assert_relative_eq!(d.x, -2.4, max_relative = TEST_EPSILON);
        assert_relative_eq!(d.y, 5.28, max_relative = TEST_EPSILON);
        assert_relative_eq!(d.z, 7.44, max_relative = TEST_EPSILON);
    }

    #[test]
    fn test_vector_add_subtract_negate() {
        let b = Vector::new(-1.0, 2.2, 3.1);
        let c = Vector::new(1.0, 1.7, -13.9);

        let d = (&b + &c).eval();
        assert_relative_eq!(
            d,
            Vector::new(0.0, 3.9, -10.8),
            epsilon = TEST_EPSILON,
            max_relative = TEST_EPSILON
        );

        let d = (&b - &c).eval();
        assert_relative_eq!(
            d,
            Vector::new(-2.0, 0.5, 17.0),
            epsilon = TEST_EPSILON,
            max_relative = TEST_EPSILON
        );

        let d: Vector = (-Vector::new(3.0, 4.0, 5.0)).into();
        assert_eq!(d, Vector::new(-3.0, -4.0, -5.0));
    }

    #[test]
    fn test_dot_spellings_agree() {
        let b = Vector::new(3.0, 4.0, 5.0);
        let c = Vector::new(-7.0, -6.0, 5.0);
        assert_eq!(&b | &c, -20.0);
        assert_eq!(b * c, -20.0);
        assert_eq!(b.dot(&c), -20.0);
    }

    #[test]
    fn test_cross_product() {
        let b = Vector::new(3.0, 4.0, 5.0);
        let c = Vector::new(-7.0, -6.0, -5.0);
        let d: Vector = (b ^ c).into();
        assert_eq!(d, Vector::new(10.0, -20.0, 10.0));
    }

    #[test]
    fn test_matrix_product() {
        let x = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let y = Matrix::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        let z = (&x * &y).eval();
        assert_eq!(
            z,
            Matrix::new(24.0, 30.0, 36.0, 51.0, 66.0, 81.0, 78.0, 102.0, 126.0)
        );
    }

    #[test]
    fn test_rebind_product_into_operand() {
        let mut x = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let y = Matrix::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        x = (&x * &y).eval();
        assert_eq!(
            x,
            Matrix::new(24.0, 30.0, 36.0, 51.0, 66.0, 81.0, 78.0, 102.0, 126.0)
        );
    }

    #[test]
    fn test_scalar_multiply_matrix() {
        let c = Matrix::new(-1.0, 2.0, 3.0, 7.0, 6.0, 5.0, 4.0, 3.0, 1.0);
        let mut d = Matrix::uninitialized();
        d.assign(2.4 * &c);
        let expected = Matrix::new(-2.4, 4.8, 7.2, 16.8, 14.4, 12.0, 9.6, 7.2, 2.4);
        assert_relative_eq!(d, expected, max_relative = TEST_EPSILON);
    }

    #[test]
    fn test_matrix_add_subtract() {
        let a = Matrix::new(-1.0, 2.0, 3.0, 7.0, 6.0, 5.0, 4.0, 3.0, 1.0);
        let b = Matrix::new(-2.0, 5.0, 4.0, 4.0, 6.0, 2.0, -4.0, 3.0, 4.0);
        let expected = Matrix::new(-3.0, 7.0, 7.0, 11.0, 12.0, 7.0, 0.0, 6.0, 5.0);

        assert_eq!((&a + &b).eval(), expected);
        assert_eq!((a - -b).eval(), expected);
    }

    #[test]
    fn test_matrix_divide_and_negate() {
        let a = Matrix::new(4.0, 8.0, -2.0, 1.0, 0.0, 2.0, 6.0, 3.0, -1.0);
        let half: Matrix = (&a / 2.0).into();
        assert_eq!(half, Matrix::new(2.0, 4.0, -1.0, 0.5, 0.0, 1.0, 3.0, 1.5, -0.5));
        let neg: Matrix = (-&a).into();
        assert_eq!(neg.xx, -4.0);
        assert_eq!(neg.zz, 1.0);
    }

    #[test]
    fn test_row_of_unevaluated_product() {
        let a = Matrix::new(-1.0, 2.0, 3.0, 7.0, 6.0, 5.0, 4.0, 3.0, 1.0);
        let b = Matrix::new(2.0, -5.0, -4.0, -4.0, -6.0, -2.0, 4.0, -3.0, -4.0);
        let row = (&a * &b).row(1);
        assert_eq!(row, Vector::new(10.0, -86.0, -60.0));
        assert_eq!((&a * &b).column(0), (&a * &b).eval().column(0));
    }

    #[test]
    fn test_nested_matrix_chain() {
        let a = Matrix::new(1.0, 2.0, 0.0, 0.0, 1.0, 3.0, 4.0, 0.0, 1.0);
        let b = Matrix::new(2.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 3.0, 1.0);
        let v = Vector::new(1.0, -1.0, 2.0);

        let lazy: Vector = (&a * &b * &v - 2.0 * &v).into();
        let ab = (&a * &b).eval();
        let abv = (&ab * &v).eval();
        let eager = (&abv - (2.0 * &v).eval()).eval();
        assert_eq!(lazy, eager);
    }

    #[test]
    fn test_expression_operands_are_reusable_by_copy() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let sum = &a + &a;
        let first = sum.eval();
        let second = (sum * 2.0).eval();
        assert_eq!(first, Vector::new(2.0, 4.0, 6.0));
        assert_eq!(second, Vector::new(4.0, 8.0, 12.0));
    }
}
