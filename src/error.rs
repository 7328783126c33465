//! The error type shared by every fallible matrix operation.

/// Shorthand for results of matrix operations.
pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

/// Why a matrix operation was rejected.
///
/// Every operation validates its arguments before it allocates or mutates
/// anything, so a matrix is left unchanged when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// The rows supplied to a constructor have different lengths.
    #[error("irregular shape: row {row} has {found} columns, expected {expected}")]
    IrregularShape { row: usize, expected: usize, found: usize },

    /// Two matrices that must agree in shape do not.
    #[error("shape mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    ShapeMismatch { left_rows: usize, left_cols: usize, right_rows: usize, right_cols: usize },

    /// A diagonal operation was applied to a non-empty, non-square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A cell, row, column or region lies outside the matrix.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// An argument is unusable, e.g. a repeat count of zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The result would be too large to allocate.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),
}

impl MatrixError {
    pub(crate) fn shape_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        MatrixError::ShapeMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_dimensions() {
        let e = MatrixError::shape_mismatch((2, 3), (3, 2));
        assert_eq!(e.to_string(), "shape mismatch: 2x3 vs 3x2");
        let e = MatrixError::NotSquare { rows: 1, cols: 4 };
        assert_eq!(e.to_string(), "matrix is not square: 1x4");
        let e = MatrixError::IrregularShape { row: 1, expected: 2, found: 3 };
        assert_eq!(e.to_string(), "irregular shape: row 1 has 3 columns, expected 2");
    }
}
