//! __densemat__ is a small library for dense matrix and vector arithmetic.
//!
//! Matrices are stored in a single flat buffer in row-major order, so that the
//! element at row `r` and column `c` of an `m x n` matrix lives at offset
//! `r*n + c`.   The library provides
//!
//! * element, row and column accessors and mutators,
//! * the elementary row operations used by Gaussian elimination,
//! * scaling, negation and in-place transposition,
//! * exact equality comparison and elementwise addition,
//! * a vector dot product and related slice operations.
//!
//! There is no sparse storage, no factorization and no linear solve.
//!
//! __Example usage__
//!
//! ```
//! use densemat::algebra::*;
//!
//! let mut A = DenseMatrix::new(2, 3);
//! A.set_row(0, &[1., 2., 3.]);
//! A.set_row(1, &[4., 5., 6.]);
//!
//! // rows are borrowed views, columns are copies
//! assert_eq!(A.row(1), &[4., 5., 6.]);
//! assert_eq!(A.col(2), vec![3., 6.]);
//!
//! A.transpose();
//! assert_eq!(A.size(), (3, 2));
//! assert_eq!(A.row(0), &[1., 4.]);
//!
//! assert_eq!(dot(&[1., 2., 3.], &[4., 5., 6.]), 32.);
//! ```
//!
//! # Errors and panics
//!
//! Operations combining two operands of incompatible size, such as
//! [`add`](crate::algebra::add), return a
//! [`MatrixError`](crate::algebra::MatrixError).   Out of range row or column
//! indices are programming errors and panic.
//!
//! # Logging
//!
//! Diagnostic records are emitted through the [`log`](https://docs.rs/log)
//! facade.  No logger is installed by the library.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
