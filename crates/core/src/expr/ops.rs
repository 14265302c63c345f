//! Operator overloads that build expression nodes.
//!
//! Every operator is implemented for the three spellings of an operand: the owned value,
//! a reference, and an unevaluated expression. Owned values are copied into the node;
//! references are borrowed for as long as the expression lives.

use std::ops::{Add, BitOr, BitXor, Div, Mul, Neg, Sub};

use super::nodes::{dot, Applied, Cross, Difference, Negation, Product, Quotient, Scaled, Sum};
use super::{MatExpr, MatrixExpr, MatrixOperand, VecExpr, VectorExpr, VectorOperand};
use crate::matrix::Matrix;
use crate::scalar::Real;
use crate::vector::Vector;

/// Vector operators for one left-hand operand spelling.
macro_rules! vector_ops {
    ($({$($gen:tt)*} $lhs:ty;)*) => {$(
        impl<$($gen)* R: VectorOperand> Add<R> for $lhs {
            type Output = VecExpr<Sum<<$lhs as VectorOperand>::Expr, R::Expr>>;

            #[inline]
            fn add(self, rhs: R) -> Self::Output {
                VecExpr::new(Sum::new(self.into_vector_expr(), rhs.into_vector_expr()))
            }
        }

        impl<$($gen)* R: VectorOperand> Sub<R> for $lhs {
            type Output = VecExpr<Difference<<$lhs as VectorOperand>::Expr, R::Expr>>;

            #[inline]
            fn sub(self, rhs: R) -> Self::Output {
                VecExpr::new(Difference::new(self.into_vector_expr(), rhs.into_vector_expr()))
            }
        }

        /// Cross product.
        impl<$($gen)* R: VectorOperand> BitXor<R> for $lhs {
            type Output = VecExpr<Cross<<$lhs as VectorOperand>::Expr, R::Expr>>;

            #[inline]
            fn bitxor(self, rhs: R) -> Self::Output {
                VecExpr::new(Cross::new(self.into_vector_expr(), rhs.into_vector_expr()))
            }
        }

        /// Dot product.
        impl<$($gen)* R: VectorOperand> BitOr<R> for $lhs {
            type Output = Real;

            #[inline]
            fn bitor(self, rhs: R) -> Real {
                dot(&self.into_vector_expr(), &rhs.into_vector_expr())
            }
        }

        /// Dot product.
        impl<$($gen)* R: VectorOperand> Mul<R> for $lhs {
            type Output = Real;

            #[inline]
            fn mul(self, rhs: R) -> Real {
                dot(&self.into_vector_expr(), &rhs.into_vector_expr())
            }
        }

        impl<$($gen)*> Mul<Real> for $lhs {
            type Output = VecExpr<Scaled<<$lhs as VectorOperand>::Expr>>;

            #[inline]
            fn mul(self, factor: Real) -> Self::Output {
                VecExpr::new(Scaled::new(factor, self.into_vector_expr()))
            }
        }

        impl<$($gen)*> Mul<$lhs> for Real {
            type Output = VecExpr<Scaled<<$lhs as VectorOperand>::Expr>>;

            #[inline]
            fn mul(self, rhs: $lhs) -> Self::Output {
                VecExpr::new(Scaled::new(self, rhs.into_vector_expr()))
            }
        }

        impl<$($gen)*> Div<Real> for $lhs {
            type Output = VecExpr<Quotient<<$lhs as VectorOperand>::Expr>>;

            #[inline]
            fn div(self, divisor: Real) -> Self::Output {
                VecExpr::new(Quotient::new(self.into_vector_expr(), divisor))
            }
        }

        impl<$($gen)*> Neg for $lhs {
            type Output = VecExpr<Negation<<$lhs as VectorOperand>::Expr>>;

            #[inline]
            fn neg(self) -> Self::Output {
                VecExpr::new(Negation::new(self.into_vector_expr()))
            }
        }
    )*};
}

/// Matrix operators for one left-hand operand spelling.
///
/// `*` has three meanings on a matrix (scalar, matrix and vector right-hand sides), so the
/// right-hand spellings are listed out instead of using one generic impl per meaning.
macro_rules! matrix_ops {
    ($({$($gen:tt)*} $lhs:ty;)*) => {$(
        impl<$($gen)* R: MatrixOperand> Add<R> for $lhs {
            type Output = MatExpr<Sum<<$lhs as MatrixOperand>::Expr, R::Expr>>;

            #[inline]
            fn add(self, rhs: R) -> Self::Output {
                MatExpr::new(Sum::new(self.into_matrix_expr(), rhs.into_matrix_expr()))
            }
        }

        impl<$($gen)* R: MatrixOperand> Sub<R> for $lhs {
            type Output = MatExpr<Difference<<$lhs as MatrixOperand>::Expr, R::Expr>>;

            #[inline]
            fn sub(self, rhs: R) -> Self::Output {
                MatExpr::new(Difference::new(self.into_matrix_expr(), rhs.into_matrix_expr()))
            }
        }

        impl<$($gen)*> Mul<Real> for $lhs {
            type Output = MatExpr<Scaled<<$lhs as MatrixOperand>::Expr>>;

            #[inline]
            fn mul(self, factor: Real) -> Self::Output {
                MatExpr::new(Scaled::new(factor, self.into_matrix_expr()))
            }
        }

        impl<$($gen)*> Mul<$lhs> for Real {
            type Output = MatExpr<Scaled<<$lhs as MatrixOperand>::Expr>>;

            #[inline]
            fn mul(self, rhs: $lhs) -> Self::Output {
                MatExpr::new(Scaled::new(self, rhs.into_matrix_expr()))
            }
        }

        impl<$($gen)*> Div<Real> for $lhs {
            type Output = MatExpr<Quotient<<$lhs as MatrixOperand>::Expr>>;

            #[inline]
            fn div(self, divisor: Real) -> Self::Output {
                MatExpr::new(Quotient::new(self.into_matrix_expr(), divisor))
            }
        }

        impl<$($gen)*> Neg for $lhs {
            type Output = MatExpr<Negation<<$lhs as MatrixOperand>::Expr>>;

            #[inline]
            fn neg(self) -> Self::Output {
                MatExpr::new(Negation::new(self.into_matrix_expr()))
            }
        }

        matrix_product!({$($gen)*} $lhs; Matrix);
        matrix_product!({'r, $($gen)*} $lhs; &'r Matrix);
        matrix_product!({$($gen)* F: MatrixExpr,} $lhs; MatExpr<F>);

        matrix_apply!({$($gen)*} $lhs; Vector);
        matrix_apply!({'r, $($gen)*} $lhs; &'r Vector);
        matrix_apply!({$($gen)* F: VectorExpr,} $lhs; VecExpr<F>);
    )*};
}

macro_rules! matrix_product {
    ({$($gen:tt)*} $lhs:ty; $rhs:ty) => {
        impl<$($gen)*> Mul<$rhs> for $lhs {
            type Output = MatExpr<
                Product<<$lhs as MatrixOperand>::Expr, <$rhs as MatrixOperand>::Expr>,
            >;

            #[inline]
            fn mul(self, rhs: $rhs) -> Self::Output {
                MatExpr::new(Product::new(self.into_matrix_expr(), rhs.into_matrix_expr()))
            }
        }
    };
}

macro_rules! matrix_apply {
    ({$($gen:tt)*} $lhs:ty; $rhs:ty) => {
        impl<$($gen)*> Mul<$rhs> for $lhs {
            type Output = VecExpr<
                Applied<<$lhs as MatrixOperand>::Expr, <$rhs as VectorOperand>::Expr>,
            >;

            #[inline]
            fn mul(self, rhs: $rhs) -> Self::Output {
                VecExpr::new(Applied::new(self.into_matrix_expr(), rhs.into_vector_expr()))
            }
        }
    };
}

vector_ops! {
    {} Vector;
    {'a,} &'a Vector;
    {E: VectorExpr,} VecExpr<E>;
}

matrix_ops! {
    {} Matrix;
    {'a,} &'a Matrix;
    {E: MatrixExpr,} MatExpr<E>;
}
