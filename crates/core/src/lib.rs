//! Fixed-size 3-D Vector and 3×3 Matrix Library
//!
//! Value types for three-component vectors and row-major 3×3 matrices with a complete
//! arithmetic surface, built so that chained expressions never materialize intermediate
//! aggregates.
//!
//! ## Deferred Evaluation
//!
//! Operators return expression nodes (see [`expr`]) rather than computed values. An
//! expression such as `&a * &x + &y` is evaluated exactly once, component by component,
//! when it is bound to a destination:
//!
//! ```
//! use vecmat3_core::{inverse, Matrix, Real, Vector};
//!
//! let a = Matrix::new(1.0, 2.0, 3.0, -1.0, 2.0, -1.0, 0.0, 0.0, 1.0);
//! let x = Vector::new(3.0, 0.0, 1.0);
//!
//! let y: Vector = (&a * &x).into();
//! assert_eq!(y.to_string(), "6 -4 1");
//!
//! let b = inverse(&a)?;
//! let back = (&b * &y).eval();
//! assert!((back - x).eval().norm() < 1e3 * Real::EPSILON);
//! # Ok::<(), vecmat3_core::Error>(())
//! ```
//!
//! ## Operators
//!
//! | expression | result |
//! |---|---|
//! | `v + w`, `v - w`, `-v` | vector |
//! | `v * w`, `v \| w` | dot product |
//! | `v ^ w` | cross product |
//! | `s * v`, `v * s`, `v / s` | vector |
//! | `A + B`, `A - B`, `-A` | matrix |
//! | `A * B` | matrix product |
//! | `A * v` | matrix–vector product |
//! | `s * A`, `A * s`, `A / s` | matrix |
//!
//! Each operand may be owned, borrowed, or itself an unevaluated expression.
//!
//! ## Scalar Type
//!
//! Components are [`Real`], which is `f64` unless the `single-precision` feature selects
//! `f32`.

pub mod error;
pub mod expr;
mod format;
mod interop;
pub mod linalg;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use error::{Error, Result};
pub use expr::{MatExpr, MatrixExpr, MatrixOperand, VecExpr, VectorExpr, VectorOperand};
pub use linalg::{determinant, dyadic, inverse, inverse_with_tolerance, rodrigues};
pub use matrix::Matrix;
pub use scalar::Real;
pub use vector::Vector;
