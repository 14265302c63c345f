//! 3×3 row-major matrix value type.

use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::expr::{nodes::Product, MatExpr, MatrixExpr, MatrixOperand, VectorExpr, VectorOperand};
use crate::scalar::Real;
use crate::vector::Vector;

/// A 3×3 matrix of [`Real`] components stored row-major.
///
/// Field names pair a row letter with a column letter: `xy` is row 0, column 1.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Matrix {
    pub xx: Real,
    pub xy: Real,
    pub xz: Real,
    pub yx: Real,
    pub yy: Real,
    pub yz: Real,
    pub zx: Real,
    pub zy: Real,
    pub zz: Real,
}

impl Matrix {
    /// Create a matrix from nine components in row-major order.
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        xx: Real, xy: Real, xz: Real,
        yx: Real, yy: Real, yz: Real,
        zx: Real, zy: Real, zz: Real,
    ) -> Self {
        Matrix { xx, xy, xz, yx, yy, yz, zx, zy, zz }
    }

    /// Create a matrix with every component set to `value`.
    #[inline]
    pub const fn from_element(value: Real) -> Self {
        Matrix::new(value, value, value, value, value, value, value, value, value)
    }

    /// Create a matrix whose contents are unspecified.
    ///
    /// See [`Vector::uninitialized`]; the same caveat applies.
    #[inline]
    pub fn uninitialized() -> Self {
        Zeroable::zeroed()
    }

    /// The identity matrix.
    #[inline]
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Matrix::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Create a matrix whose rows are `r0`, `r1` and `r2`.
    #[inline]
    pub fn from_rows(r0: Vector, r1: Vector, r2: Vector) -> Self {
        Matrix::from([*r0.as_array(), *r1.as_array(), *r2.as_array()])
    }

    /// Assign all nine components in row-major order.
    #[inline]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        xx: Real, xy: Real, xz: Real,
        yx: Real, yy: Real, yz: Real,
        zx: Real, zy: Real, zz: Real,
    ) -> &mut Self {
        self.xx = xx; self.xy = xy; self.xz = xz;
        self.yx = yx; self.yy = yy; self.yz = yz;
        self.zx = zx; self.zy = zy; self.zz = zz;
        self
    }

    /// Set every component to zero.
    #[inline]
    pub fn zero(&mut self) -> &mut Self {
        *self = Zeroable::zeroed();
        self
    }

    /// Evaluate `rhs` directly into this matrix's storage.
    ///
    /// The borrow checker rejects expressions that read from `self`; to multiply in place use
    /// `*=`, which buffers the left operand first.
    pub fn assign<R: MatrixOperand>(&mut self, rhs: R) -> &mut Self {
        let expr = rhs.into_matrix_expr();
        for (i, row) in self.as_rows_mut().iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = expr.entry(i, j);
            }
        }
        self
    }

    /// Component at (`row`, `col`) (call-style spelling of `m[row][col]`).
    #[inline]
    #[track_caller]
    pub fn at(&self, row: usize, col: usize) -> Real {
        self[(row, col)]
    }

    /// Mutable component at (`row`, `col`).
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut Real {
        &mut self[(row, col)]
    }

    /// View the storage as three row arrays.
    #[inline]
    pub fn as_rows(&self) -> &[[Real; 3]; 3] {
        bytemuck::cast_ref(self)
    }

    /// Mutable view of the storage as three row arrays.
    #[inline]
    pub fn as_rows_mut(&mut self) -> &mut [[Real; 3]; 3] {
        bytemuck::cast_mut(self)
    }

    /// All nine components in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Real] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// Copy of row `i`.
    #[inline]
    #[track_caller]
    pub fn row(&self, i: usize) -> Vector {
        Vector::from(self[i])
    }

    /// Copy of column `j`.
    #[inline]
    #[track_caller]
    pub fn column(&self, j: usize) -> Vector {
        Vector::new(self[(0, j)], self[(1, j)], self[(2, j)])
    }

    /// Overwrite row `i` with `v`; other rows are untouched.
    #[track_caller]
    pub fn set_row<V: VectorOperand>(&mut self, i: usize, v: V) -> &mut Self {
        let v = v.into_vector_expr();
        let row = &mut self[i];
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = v.component(j);
        }
        self
    }

    /// Overwrite column `j` with `v`; other columns are untouched.
    #[track_caller]
    pub fn set_column<V: VectorOperand>(&mut self, j: usize, v: V) -> &mut Self {
        check_index(j);
        let v = v.into_vector_expr();
        for (i, row) in self.as_rows_mut().iter_mut().enumerate() {
            row[j] = v.component(i);
        }
        self
    }

    /// Sum of squares of all nine components.
    #[inline]
    pub fn norm_squared(&self) -> Real {
        self.as_slice().iter().map(|c| c * c).sum()
    }

    /// Frobenius norm.
    #[inline]
    pub fn norm(&self) -> Real {
        self.norm_squared().sqrt()
    }
}

#[inline]
#[track_caller]
fn check_index(i: usize) {
    assert!(i < 3, "Matrix index {i} out of range (expected 0, 1 or 2)");
}

impl From<[[Real; 3]; 3]> for Matrix {
    fn from(rows: [[Real; 3]; 3]) -> Self {
        bytemuck::cast(rows)
    }
}

impl From<Matrix> for [[Real; 3]; 3] {
    fn from(m: Matrix) -> Self {
        bytemuck::cast(m)
    }
}

/// `m[i]` is row `i`, so `m[i][j]` reads a single component.
impl Index<usize> for Matrix {
    type Output = [Real; 3];

    #[inline]
    #[track_caller]
    fn index(&self, i: usize) -> &[Real; 3] {
        check_index(i);
        &self.as_rows()[i]
    }
}

impl IndexMut<usize> for Matrix {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut [Real; 3] {
        check_index(i);
        &mut self.as_rows_mut()[i]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;

    #[inline]
    #[track_caller]
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        check_index(j);
        &self[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        check_index(j);
        &mut self[i][j]
    }
}

impl<R: MatrixOperand> AddAssign<R> for Matrix {
    fn add_assign(&mut self, rhs: R) {
        let rhs = rhs.into_matrix_expr();
        for (i, row) in self.as_rows_mut().iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell += rhs.entry(i, j);
            }
        }
    }
}

impl<R: MatrixOperand> SubAssign<R> for Matrix {
    fn sub_assign(&mut self, rhs: R) {
        let rhs = rhs.into_matrix_expr();
        for (i, row) in self.as_rows_mut().iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell -= rhs.entry(i, j);
            }
        }
    }
}

impl MulAssign<Real> for Matrix {
    fn mul_assign(&mut self, factor: Real) {
        for cell in self.as_rows_mut().iter_mut().flatten() {
            *cell *= factor;
        }
    }
}

/// In-place matrix product: `m *= n` leaves `m` equal to the old `m * n`.
impl<R: MatrixOperand> MulAssign<R> for Matrix {
    fn mul_assign(&mut self, rhs: R) {
        // Every output row reads a full row of the old left operand.
        let lhs = *self;
        self.assign(MatExpr::new(Product::new(lhs, rhs.into_matrix_expr())));
    }
}

impl DivAssign<Real> for Matrix {
    fn div_assign(&mut self, divisor: Real) {
        for cell in self.as_rows_mut().iter_mut().flatten() {
            *cell /= divisor;
        }
    }
}
