//! Expression tree nodes.
//!
//! Each node stores its operands (references, copies, or further nodes) and computes one
//! output component at a time. Elementwise nodes implement both [`VectorExpr`] and
//! [`MatrixExpr`] when their operands do.

use super::{MatrixExpr, VectorExpr};
use crate::scalar::Real;

/// `lhs + rhs`
#[derive(Debug, Clone, Copy)]
pub struct Sum<L, R> {
    lhs: L,
    rhs: R,
}

/// `lhs - rhs`
#[derive(Debug, Clone, Copy)]
pub struct Difference<L, R> {
    lhs: L,
    rhs: R,
}

/// `-expr`
#[derive(Debug, Clone, Copy)]
pub struct Negation<E> {
    expr: E,
}

/// `factor * expr`
#[derive(Debug, Clone, Copy)]
pub struct Scaled<E> {
    factor: Real,
    expr: E,
}

/// `expr / divisor`
///
/// Kept separate from [`Scaled`] so every component is divided, not multiplied by a
/// rounded reciprocal.
#[derive(Debug, Clone, Copy)]
pub struct Quotient<E> {
    expr: E,
    divisor: Real,
}

/// Matrix–matrix product.
#[derive(Debug, Clone, Copy)]
pub struct Product<L, R> {
    lhs: L,
    rhs: R,
}

/// Matrix–vector product.
#[derive(Debug, Clone, Copy)]
pub struct Applied<M, V> {
    matrix: M,
    vector: V,
}

/// Right-handed cross product.
#[derive(Debug, Clone, Copy)]
pub struct Cross<L, R> {
    lhs: L,
    rhs: R,
}

/// Outer (dyadic) product `g ⊗ h`.
#[derive(Debug, Clone, Copy)]
pub struct Outer<G, H> {
    g: G,
    h: H,
}

impl<L, R> Sum<L, R> {
    pub(crate) fn new(lhs: L, rhs: R) -> Self {
        Sum { lhs, rhs }
    }
}

impl<L, R> Difference<L, R> {
    pub(crate) fn new(lhs: L, rhs: R) -> Self {
        Difference { lhs, rhs }
    }
}

impl<E> Negation<E> {
    pub(crate) fn new(expr: E) -> Self {
        Negation { expr }
    }
}

impl<E> Scaled<E> {
    pub(crate) fn new(factor: Real, expr: E) -> Self {
        Scaled { factor, expr }
    }
}

impl<E> Quotient<E> {
    pub(crate) fn new(expr: E, divisor: Real) -> Self {
        Quotient { expr, divisor }
    }
}

impl<L, R> Product<L, R> {
    pub(crate) fn new(lhs: L, rhs: R) -> Self {
        Product { lhs, rhs }
    }
}

impl<M, V> Applied<M, V> {
    pub(crate) fn new(matrix: M, vector: V) -> Self {
        Applied { matrix, vector }
    }
}

impl<L, R> Cross<L, R> {
    pub(crate) fn new(lhs: L, rhs: R) -> Self {
        Cross { lhs, rhs }
    }
}

impl<G, H> Outer<G, H> {
    pub(crate) fn new(g: G, h: H) -> Self {
        Outer { g, h }
    }
}

impl<L: VectorExpr, R: VectorExpr> VectorExpr for Sum<L, R> {
    #[inline]
    fn component(&self, i: usize) -> Real {
        self.lhs.component(i) + self.rhs.component(i)
    }
}

impl<L: MatrixExpr, R: MatrixExpr> MatrixExpr for Sum<L, R> {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        self.lhs.entry(row, col) + self.rhs.entry(row, col)
    }
}

impl<L: VectorExpr, R: VectorExpr> VectorExpr for Difference<L, R> {
    #[inline]
    fn component(&self, i: usize) -> Real {
        self.lhs.component(i) - self.rhs.component(i)
    }
}

impl<L: MatrixExpr, R: MatrixExpr> MatrixExpr for Difference<L, R> {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        self.lhs.entry(row, col) - self.rhs.entry(row, col)
    }
}

impl<E: VectorExpr> VectorExpr for Negation<E> {
    #[inline]
    fn component(&self, i: usize) -> Real {
        -self.expr.component(i)
    }
}

impl<E: MatrixExpr> MatrixExpr for Negation<E> {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        -self.expr.entry(row, col)
    }
}

impl<E: VectorExpr> VectorExpr for Scaled<E> {
    #[inline]
    fn component(&self, i: usize) -> Real {
        self.factor * self.expr.component(i)
    }
}

impl<E: MatrixExpr> MatrixExpr for Scaled<E> {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        self.factor * self.expr.entry(row, col)
    }
}

impl<E: VectorExpr> VectorExpr for Quotient<E> {
    #[inline]
    fn component(&self, i: usize) -> Real {
        self.expr.component(i) / self.divisor
    }
}

impl<E: MatrixExpr> MatrixExpr for Quotient<E> {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        self.expr.entry(row, col) / self.divisor
    }
}

impl<L: MatrixExpr, R: MatrixExpr> MatrixExpr for Product<L, R> {
    /// Row `row` of `lhs` dotted with column `col` of `rhs`, summed left to right.
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        self.lhs.entry(row, 0) * self.rhs.entry(0, col)
            + self.lhs.entry(row, 1) * self.rhs.entry(1, col)
            + self.lhs.entry(row, 2) * self.rhs.entry(2, col)
    }
}

impl<M: MatrixExpr, V: VectorExpr> VectorExpr for Applied<M, V> {
    #[inline]
    fn component(&self, i: usize) -> Real {
        self.matrix.entry(i, 0) * self.vector.component(0)
            + self.matrix.entry(i, 1) * self.vector.component(1)
            + self.matrix.entry(i, 2) * self.vector.component(2)
    }
}

impl<L: VectorExpr, R: VectorExpr> VectorExpr for Cross<L, R> {
    #[inline]
    #[track_caller]
    fn component(&self, i: usize) -> Real {
        // Component i pairs the two other axes in cyclic order.
        let (j, k) = match i {
            0 => (1, 2),
            1 => (2, 0),
            2 => (0, 1),
            _ => panic!("Vector index {i} out of range (expected 0, 1 or 2)"),
        };
        self.lhs.component(j) * self.rhs.component(k)
            - self.lhs.component(k) * self.rhs.component(j)
    }
}

impl<G: VectorExpr, H: VectorExpr> MatrixExpr for Outer<G, H> {
    #[inline]
    fn entry(&self, row: usize, col: usize) -> Real {
        self.g.component(row) * self.h.component(col)
    }
}

/// Inner product of two vector expressions, `x1*x2 + y1*y2 + z1*z2`.
#[inline]
pub(crate) fn dot<L: VectorExpr, R: VectorExpr>(lhs: &L, rhs: &R) -> Real {
    lhs.component(0) * rhs.component(0)
        + lhs.component(1) * rhs.component(1)
        + lhs.component(2) * rhs.component(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, Vector};

    #[test]
    fn test_cross_components_follow_right_hand_rule() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        let z = Cross::new(&x, &y);
        assert_eq!(z.eval(), Vector::new(0.0, 0.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_cross_component_out_of_range_panics() {
        let a = Vector::from_element(1.0);
        let _ = Cross::new(&a, &a).component(3);
    }

    #[test]
    fn test_outer_entries() {
        let g = Vector::new(-1.0, 2.0, 3.0);
        let h = Vector::new(1.0, 3.0, 6.0);
        let f = Outer::new(&g, &h);
        assert_eq!(f.entry(0, 2), -6.0);
        assert_eq!(f.entry(2, 1), 9.0);
    }

    #[test]
    fn test_applied_is_linear_map() {
        let m = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let v = Vector::new(1.0, 0.0, -1.0);
        assert_eq!(Applied::new(&m, &v).eval(), Vector::new(-2.0, -2.0, -2.0));
    }

    #[test]
    fn test_quotient_divides_each_component() {
        let v = Vector::new(1.0, 2.0, 3.0);
        let q = Quotient::new(&v, 3.0).eval();
        assert_eq!(q, Vector::new(1.0 / 3.0, 2.0 / 3.0, 1.0));
    }

    #[test]
    fn test_dot_matches_formula() {
        let a = Vector::new(3.0, 4.0, 5.0);
        let b = Vector::new(-7.0, -6.0, 5.0);
        assert_eq!(dot(&a, &b), -20.0);
    }
}
