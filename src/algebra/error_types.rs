use thiserror::Error;

/// Error type returned by dense matrix construction and arithmetic.
///
/// Only cross-operand dimension problems are reported this way.  Out of
/// range row or column indices are programming errors and panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operands of a binary operation do not have the same dimensions
    #[error("Matrices must be same size: {lhs:?} vs {rhs:?}")]
    IncompatibleDimension {
        /// size of the left operand
        lhs: (usize, usize),
        /// size of the right operand
        rhs: (usize, usize),
    },
    /// Data length does not agree with the requested matrix dimensions
    #[error("Data of length {len} cannot fill a matrix of size {size:?}")]
    BadDataLength {
        /// requested (rows, cols)
        size: (usize, usize),
        /// length of the supplied data
        len: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by display settings validation.
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
