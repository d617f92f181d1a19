#![allow(non_snake_case)]
use crate::algebra::{
    same_size, DenseMatrix, FloatT, MatrixError, MatrixMath, ShapedMatrix, VectorMath,
};
use itertools::izip;

impl<T: FloatT> MatrixMath for DenseMatrix<T> {
    type T = T;

    //scalar mut operations
    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }

    fn add(&self, B: &Self) -> Result<Self, MatrixError> {
        if !same_size(self, B) {
            log::debug!(
                "rejecting addition of {:?} and {:?} matrices",
                self.size(),
                B.size()
            );
            return Err(MatrixError::IncompatibleDimension {
                lhs: self.size(),
                rhs: B.size(),
            });
        }

        let mut out = DenseMatrix::new(self.rows, self.cols);
        for (c, &a, &b) in izip!(&mut out.data, &self.data, &B.data) {
            *c = a + b;
        }
        Ok(out)
    }
}

/// Elementwise sum `A + B` into a new matrix.
///
/// ```
/// use densemat::algebra::*;
///
/// let A = DenseMatrix::from(&[[1., 2.], [3., 4.]]);
/// let B = DenseMatrix::identity(2);
/// let C = add(&A, &B).unwrap();
/// assert_eq!(C.data(), &[2., 2., 3., 5.]);
///
/// // differently sized operands are rejected
/// assert!(add(&A, &DenseMatrix::new(2, 3)).is_err());
/// ```
pub fn add<T: FloatT>(A: &DenseMatrix<T>, B: &DenseMatrix<T>) -> Result<DenseMatrix<T>, MatrixError> {
    A.add(B)
}

#[test]
fn test_scale_negate() {
    let mut A = DenseMatrix::from(&[
        [1., -2.], //
        [3., 0.5], //
    ]);
    A.scale(2.);
    assert_eq!(A.data(), &[2., -4., 6., 1.]);
    A.negate();
    assert_eq!(A.data(), &[-2., 4., -6., -1.]);
}

#[test]
fn test_add_size_mismatch() {
    let A = DenseMatrix::<f64>::new(2, 3);
    let B = DenseMatrix::<f64>::new(3, 2);
    assert_eq!(
        A.add(&B),
        Err(MatrixError::IncompatibleDimension {
            lhs: (2, 3),
            rhs: (3, 2)
        })
    );
}
