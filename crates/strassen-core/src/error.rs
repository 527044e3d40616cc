//! Error type for matrix construction and multiplication.

/// Error type for matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Operand shapes cannot be multiplied together.
    #[error(
        "dimension mismatch: {lhs_rows}x{lhs_cols} cannot be multiplied by {rhs_rows}x{rhs_cols}"
    )]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// A square matrix was required.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Strassen decomposition needs an order that halves down to 1.
    #[error("matrix order {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Flat buffer length does not match the requested shape.
    #[error("buffer of length {len} does not match a {rows}x{cols} matrix")]
    BufferLength { len: usize, rows: usize, cols: usize },

    /// Rows of a nested vector have different lengths.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Two algorithms produced different products for the same input.
    #[error("result mismatch between {0} and {1}")]
    Mismatch(String, String),

    /// An intermediate value does not fit the element type.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Cross-validation was asked to compare nothing.
    #[error("no results to compare")]
    NoResults,
}
