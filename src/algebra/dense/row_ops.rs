// Elementary row operations, as used in Gaussian elimination.

use crate::algebra::{DenseMatrix, FloatT, VectorMath};

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    /// Exchange the contents of rows `r1` and `r2`
    pub fn row_swap(&mut self, r1: usize, r2: usize) {
        assert!(r1 < self.rows && r2 < self.rows);
        if r1 == r2 {
            return;
        }
        let n = self.cols;
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[(lo * n)..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    /// Multiply row `row` by `c`
    pub fn row_scale(&mut self, row: usize, c: T) {
        self.row_mut(row).scale(c);
    }

    /// Add the first `ncols()` entries of `vals` onto row `row`
    ///
    /// # Panics
    /// Panics if `vals` is shorter than a row.
    pub fn row_add(&mut self, row: usize, vals: &[T]) {
        let n = self.cols;
        self.row_mut(row).axpby(T::one(), &vals[..n], T::one());
    }
}
