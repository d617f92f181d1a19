use crate::algebra::{same_size, DenseMatrix, FloatT, MatrixError, ShapedMatrix, VectorMath};

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    /// `DenseMatrix` constructor.  Allocates a `rows x cols`
    /// matrix of zeros.
    ///
    /// Zero dimensions are allowed and produce an empty matrix.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let Some(len) = rows.checked_mul(cols) else {
            panic!("matrix size {}x{} overflows usize", rows, cols);
        };
        let data = vec![T::zero(); len];
        Self { rows, cols, data }
    }

    /// `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut mat = Self::new(n, n);
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        mat
    }

    /// Copy a matrix of dimension `size = (rows, cols)` from
    /// row-major data in `src`.
    pub fn from_slice(size: (usize, usize), src: &[T]) -> Result<Self, MatrixError> {
        let (rows, cols) = size;
        if rows.checked_mul(cols) != Some(src.len()) {
            return Err(MatrixError::BadDataLength {
                size,
                len: src.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: src.to_vec(),
        })
    }

    /// flat row-major data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// mutable flat row-major data
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    /// overwrite the element at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, val: T) {
        self[(row, col)] = val;
    }

    /// Borrowed view of a row.  The view aliases the matrix
    /// storage, so it always reflects the current contents.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows);
        &self.data[(row * self.cols)..(row + 1) * self.cols]
    }

    /// Mutable view of a row.  Writes through the view modify the matrix.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows);
        &mut self.data[(row * self.cols)..(row + 1) * self.cols]
    }

    /// Copy of a column.  The returned vector is independent
    /// of the matrix.
    pub fn col(&self, col: usize) -> Vec<T> {
        assert!(col < self.cols);
        self.data.iter().skip(col).step_by(self.cols).copied().collect()
    }

    /// Overwrite a row with the first `ncols()` entries of `vals`.
    ///
    /// # Panics
    /// Panics if `vals` is shorter than a row.
    pub fn set_row(&mut self, row: usize, vals: &[T]) {
        let n = self.cols;
        self.row_mut(row).copy_from_slice(&vals[..n]);
    }

    /// Overwrite a column with the first `nrows()` entries of `vals`.
    ///
    /// # Panics
    /// Panics if `vals` is shorter than a column.
    pub fn set_col(&mut self, col: usize, vals: &[T]) {
        assert!(col < self.cols);
        for (row, &v) in vals[..self.rows].iter().enumerate() {
            self[(row, col)] = v;
        }
    }

    /// Transpose the matrix in place.
    ///
    /// The transposed data is assembled in new storage, after which
    /// the dimensions and data are replaced together.
    pub fn transpose(&mut self) {
        log::trace!("transposing {}x{} matrix", self.rows, self.cols);
        *self = self.transposed();
    }

    /// Transposed copy of the matrix
    pub fn transposed(&self) -> Self {
        let (m, n) = self.size();
        let mut data = vec![T::zero(); n * m];
        for (i, row) in self.data.chunks_exact(n.max(1)).enumerate() {
            for (j, &v) in row.iter().enumerate() {
                data[j * m + i] = v;
            }
        }
        Self {
            rows: n,
            cols: m,
            data,
        }
    }

    /// True if `self` and `B` are the same size and all
    /// elements compare equal.
    ///
    /// Comparison is exact, without any tolerance.  `NaN` entries
    /// are never equal to anything.
    #[allow(non_snake_case)]
    pub fn equals(&self, B: &Self) -> bool {
        same_size(self, B) && self.data == B.data
    }

    /// Set every element to zero
    pub fn set_zero(&mut self) -> &mut Self {
        self.data.set(T::zero());
        self
    }
}

// Build from a row-major array literal.  Each inner
// array is one row of the matrix.
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for DenseMatrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self {
            rows: M,
            cols: N,
            data,
        }
    }
}
