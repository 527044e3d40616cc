//! # strassen-core
//!
//! Core library for the Strassen workspace.
//! Implements zero-copy matrix views, the naive cubic multiplication baseline
//! and Strassen's divide-and-conquer multiplication, both reporting exact
//! scalar operation counts.

pub mod complexity;
pub mod constants;
pub mod error;
pub mod matrix;
pub mod memory_budget;
pub mod multiplier;
pub mod naive;
pub mod ops;
pub mod result;
pub mod strassen;
pub mod view;

// Re-exports
pub use constants::exit_codes;
pub use error::MatrixError;
pub use matrix::{Matrix, Scalar};
pub use multiplier::{
    compare_results, default_multipliers, multiply_naive, multiply_strassen, Multiplier,
    NaiveMultiplier, StrassenMultiplier,
};
pub use ops::ElementOp;
pub use result::{OperationCounts, OperationResult};
pub use view::{MatrixView, MatrixViewMut, Quadrants};

/// Multiply two square matrices with Strassen's algorithm.
///
/// This is a convenience function for simple use cases. For the operation
/// counts, use [`multiply_strassen`] directly.
///
/// # Example
/// ```
/// use strassen_core::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    multiply_strassen(a, b).map(OperationResult::into_result)
}
