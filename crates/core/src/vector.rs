//! Three-component vector value type.
//!
//! [`Vector`] is a plain `Copy` aggregate with named (`x`, `y`, `z`) and positional
//! (`v[0]`, `v.at(0)`) access. Binary operators on vectors do not compute anything by
//! themselves: they build deferred expressions (see [`crate::expr`]) that are evaluated once
//! when bound to a destination.

use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::expr::{VectorExpr, VectorOperand};
use crate::scalar::Real;

/// A 3-D vector of [`Real`] components.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector {
    /// Create a vector from its three components.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Vector { x, y, z }
    }

    /// Create a vector with every component set to `value`.
    #[inline]
    pub const fn from_element(value: Real) -> Self {
        Vector::new(value, value, value)
    }

    /// Create a vector whose contents are unspecified.
    ///
    /// Callers must not rely on the component values until they have been written, either by
    /// [`set`](Self::set), [`zero`](Self::zero), [`assign`](Self::assign) or per-component
    /// access.
    #[inline]
    pub fn uninitialized() -> Self {
        Zeroable::zeroed()
    }

    /// Assign `x`, `y` and `z` in that order.
    #[inline]
    pub fn set(&mut self, x: Real, y: Real, z: Real) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Set every component to zero.
    #[inline]
    pub fn zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0)
    }

    /// Evaluate `rhs` directly into this vector's storage.
    ///
    /// Accepts another vector, a reference, or an unevaluated expression. An expression that
    /// borrows `self` cannot be passed here, so no component is read after being overwritten.
    #[inline]
    pub fn assign<R: VectorOperand>(&mut self, rhs: R) -> &mut Self {
        let expr = rhs.into_vector_expr();
        let (x, y, z) = (expr.component(0), expr.component(1), expr.component(2));
        self.set(x, y, z)
    }

    /// Component `i` (call-style spelling of `v[i]`).
    #[inline]
    pub fn at(&self, i: usize) -> Real {
        self[i]
    }

    /// Mutable component `i` (call-style spelling of `&mut v[i]`).
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> &mut Real {
        &mut self[i]
    }

    /// View the components as an array in `x, y, z` order.
    #[inline]
    pub fn as_array(&self) -> &[Real; 3] {
        bytemuck::cast_ref(self)
    }

    /// Mutable view of the components as an array in `x, y, z` order.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [Real; 3] {
        bytemuck::cast_mut(self)
    }

    /// Inner product, same as `self | other`.
    #[inline]
    pub fn dot(&self, other: &Vector) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product, evaluated immediately.
    #[inline]
    pub fn cross(&self, other: &Vector) -> Vector {
        (self ^ other).eval()
    }

    /// `x*x + y*y + z*z`
    #[inline]
    pub fn norm_squared(&self) -> Real {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(&self) -> Real {
        self.norm_squared().sqrt()
    }
}

impl From<[Real; 3]> for Vector {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<Vector> for [Real; 3] {
    fn from(v: Vector) -> Self {
        *v.as_array()
    }
}

impl Index<usize> for Vector {
    type Output = Real;

    #[inline]
    #[track_caller]
    fn index(&self, i: usize) -> &Real {
        assert!(i < 3, "Vector index {i} out of range (expected 0, 1 or 2)");
        &self.as_array()[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Real {
        assert!(i < 3, "Vector index {i} out of range (expected 0, 1 or 2)");
        &mut self.as_mut_array()[i]
    }
}

impl<R: VectorOperand> AddAssign<R> for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: R) {
        let rhs = rhs.into_vector_expr();
        self.x += rhs.component(0);
        self.y += rhs.component(1);
        self.z += rhs.component(2);
    }
}

impl<R: VectorOperand> SubAssign<R> for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: R) {
        let rhs = rhs.into_vector_expr();
        self.x -= rhs.component(0);
        self.y -= rhs.component(1);
        self.z -= rhs.component(2);
    }
}

impl MulAssign<Real> for Vector {
    #[inline]
    fn mul_assign(&mut self, factor: Real) {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
    }
}

impl DivAssign<Real> for Vector {
    #[inline]
    fn div_assign(&mut self, divisor: Real) {
        self.x /= divisor;
        self.y /= divisor;
        self.z /= divisor;
    }
}
