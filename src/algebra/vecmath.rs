use super::{FloatT, VectorMath};
use std::iter::zip;

/// A plain sequence of floating point values.
pub type Vector<T = f64> = Vec<T>;

/// Dot product of two vectors.
///
/// ```
/// use densemat::algebra::dot;
///
/// assert_eq!(dot(&[1., 2., 3.], &[4., 5., 6.]), 32.);
/// ```
///
/// # Panics
/// Panics if `v1` and `v2` have different lengths.  Neither operand
/// is ever silently truncated.
pub fn dot<T: FloatT>(v1: &[T], v2: &[T]) -> T {
    v1.dot(v2)
}

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn sumsq(&self) -> T {
        self.dot(self)
    }

    // 2-norm
    fn norm(&self) -> T {
        T::sqrt(self.sumsq())
    }

    // Returns infinity norm
    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        //handle b = 1 separately
        if b == T::one() {
            zip(&mut *self, x).for_each(|(y, x)| *y += a * (*x));
        } else {
            zip(&mut *self, x).for_each(|(y, x)| *y = a * (*x) + b * (*y));
        }
        self
    }
}
