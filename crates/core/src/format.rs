//! Textual rendering.
//!
//! - `Vector`: `"x y z"`, single spaces, no brackets or surrounding whitespace
//! - `Matrix`: a leading newline, then each row as `"a b c"` followed by a newline
//!
//! Formatter flags such as precision apply to every component, so `{:.3}` renders each
//! value with three decimals.

use std::fmt;

use crate::expr::{MatExpr, MatrixExpr, VecExpr, VectorExpr};
use crate::matrix::Matrix;
use crate::scalar::Real;
use crate::vector::Vector;

fn write_triple(f: &mut fmt::Formatter<'_>, values: &[Real; 3]) -> fmt::Result {
    fmt::Display::fmt(&values[0], f)?;
    f.write_str(" ")?;
    fmt::Display::fmt(&values[1], f)?;
    f.write_str(" ")?;
    fmt::Display::fmt(&values[2], f)
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, self.as_array())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")?;
        for row in self.as_rows() {
            write_triple(f, row)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<E: VectorExpr> fmt::Display for VecExpr<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.eval(), f)
    }
}

impl<E: MatrixExpr> fmt::Display for MatExpr<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.eval(), f)
    }
}
