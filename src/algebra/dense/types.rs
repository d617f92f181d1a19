use crate::algebra::{FloatT, ShapedMatrix};
use std::ops::{Index, IndexMut};

/// Dense matrix in row-major format
///
/// __Example usage__ : To construct the 2 x 3 matrix
/// ```text
/// A = [1.  2.  3.]
///     [4.  5.  6.]
/// ```
///
/// ```
/// use densemat::algebra::*;
///
/// let A = DenseMatrix::from(&[
///     [1., 2., 3.], //
///     [4., 5., 6.], //
/// ]);
///
/// assert_eq!(A.size(), (2, 3));
/// assert_eq!(A.data(), &[1., 2., 3., 4., 5., 6.]);
/// ```
///
/// Elements are addressed by `(row, col)`.  Any row or column index
/// outside the matrix dimensions panics, including column indices whose
/// flat offset would happen to fall inside the storage buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T = f64> {
    /// number of rows
    pub(crate) rows: usize,
    /// number of columns
    pub(crate) cols: usize,
    /// vector of data in row major format.  Always of length `rows*cols`
    pub(crate) data: Vec<T>,
}

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    #[inline]
    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        let (row, col) = idx;
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T> ShapedMatrix for DenseMatrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}
