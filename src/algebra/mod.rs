//! Dense matrix and vector types and their arithmetic.
//!
//! [`DenseMatrix`] stores its entries in a single row-major buffer.
//! Slice-valued vector operations are provided through [`VectorMath`],
//! and elementwise matrix operations through [`MatrixMath`].

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use vecmath::*;

#[cfg(test)]
mod tests;
