//! Conversions to and from `nalgebra`, and approximate comparison through `approx`.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra::{Matrix3, Vector3};

use crate::matrix::Matrix;
use crate::scalar::Real;
use crate::vector::Vector;

impl From<Vector3<Real>> for Vector {
    fn from(v: Vector3<Real>) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vector3<Real> {
    fn from(v: Vector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Matrix3<Real>> for Matrix {
    fn from(m: Matrix3<Real>) -> Self {
        let mut out = Matrix::uninitialized();
        for (i, row) in out.as_rows_mut().iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = m[(i, j)];
            }
        }
        out
    }
}

impl From<Matrix> for Matrix3<Real> {
    fn from(m: Matrix) -> Self {
        Matrix3::from_row_slice(m.as_slice())
    }
}

/// Component-wise comparisons, all components must agree.
macro_rules! impl_approx {
    ($ty:ty, $components:ident) => {
        impl AbsDiffEq for $ty {
            type Epsilon = Real;

            fn default_epsilon() -> Real {
                <Real as AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
                self.$components()
                    .iter()
                    .zip(other.$components())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> Real {
                <Real as RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
                self.$components()
                    .iter()
                    .zip(other.$components())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $ty {
            fn default_max_ulps() -> u32 {
                <Real as UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
                self.$components()
                    .iter()
                    .zip(other.$components())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

impl_approx!(Vector, as_array);
impl_approx!(Matrix, as_slice);
