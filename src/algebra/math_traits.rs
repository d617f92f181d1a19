use super::{FloatT, MatrixError};

// Elementwise math on matrices goes through these traits, which
// are implemented generically for floats of type FloatT.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T: FloatT;

    /// Set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise negation of entries.
    fn negate(&mut self) -> &mut Self;

    /// Dot product.
    ///
    /// # Panics
    /// Panics if `self` and `y` have different lengths.
    fn dot(&self, y: &Self) -> Self::T;

    /// Sum of elements squared.
    fn sumsq(&self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`
    ///
    /// # Panics
    /// Panics if `self` and `x` have different lengths.
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;
}

/// Matrix operations for dense matrices of [`FloatT`](crate::algebra::FloatT)

pub trait MatrixMath: Sized {
    type T: FloatT;

    /// Elementwise scaling
    fn scale(&mut self, c: Self::T);

    /// Elementwise negation
    fn negate(&mut self);

    /// Elementwise sum of `self` and `B` into a new matrix.
    ///
    /// Fails with [`MatrixError::IncompatibleDimension`] unless the
    /// operands are the same size.
    #[allow(non_snake_case)]
    fn add(&self, B: &Self) -> Result<Self, MatrixError>;
}
