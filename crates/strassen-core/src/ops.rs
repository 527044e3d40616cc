//! Element-wise addition and subtraction between views.
//!
//! Every pass visits each element of the destination once and reports that
//! number of elements as its addition count.

use crate::error::MatrixError;
use crate::matrix::{Matrix, Scalar};
use crate::result::{OperationCounts, OperationResult};
use crate::view::{MatrixView, MatrixViewMut};

/// Binary scalar operator applied by the combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementOp {
    Add,
    Subtract,
}

impl ElementOp {
    /// `lhs op rhs`, or [`MatrixError::Overflow`] if it does not fit `T`.
    #[inline]
    pub fn apply<T: Scalar>(self, lhs: T, rhs: T) -> Result<T, MatrixError> {
        let value = match self {
            Self::Add => lhs.checked_add(&rhs),
            Self::Subtract => lhs.checked_sub(&rhs),
        };
        value.ok_or(MatrixError::Overflow(self.label()))
    }

    /// Label used for the results of this operator.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
        }
    }
}

/// Checked scalar product shared by the multiplication engines.
#[inline]
pub fn scalar_product<T: Scalar>(lhs: T, rhs: T) -> Result<T, MatrixError> {
    lhs.checked_mul(&rhs)
        .ok_or(MatrixError::Overflow("Multiplication"))
}

#[allow(clippy::cast_possible_truncation)]
fn elements(rows: usize, cols: usize) -> u64 {
    (rows * cols) as u64
}

/// `lhs op rhs` into a freshly allocated matrix.
pub fn combine<'a, T: Scalar>(
    lhs: MatrixView<'a, T>,
    rhs: MatrixView<'a, T>,
    op: ElementOp,
) -> Result<OperationResult<'a, T>, MatrixError> {
    let mut result = Matrix::zeros(lhs.rows(), lhs.cols());
    let counts = combine_into(lhs, rhs, &mut result.view_mut(), op)?;
    Ok(OperationResult {
        label: op.label(),
        lhs,
        rhs,
        result,
        counts,
    })
}

/// `dst = lhs op rhs`, writing into an existing window.
pub fn combine_into<T: Scalar>(
    lhs: MatrixView<'_, T>,
    rhs: MatrixView<'_, T>,
    dst: &mut MatrixViewMut<'_, T>,
    op: ElementOp,
) -> Result<OperationCounts, MatrixError> {
    debug_assert_eq!((lhs.rows(), lhs.cols()), (rhs.rows(), rhs.cols()));
    debug_assert_eq!((lhs.rows(), lhs.cols()), (dst.rows(), dst.cols()));

    for row in 0..lhs.rows() {
        for col in 0..lhs.cols() {
            dst.set(row, col, op.apply(lhs.get(row, col), rhs.get(row, col))?);
        }
    }
    Ok(OperationCounts::additions(elements(lhs.rows(), lhs.cols())))
}

/// `dst = dst op rhs`, the aliasing form used to accumulate into a window.
pub fn combine_assign<T: Scalar>(
    dst: &mut MatrixViewMut<'_, T>,
    rhs: MatrixView<'_, T>,
    op: ElementOp,
) -> Result<OperationCounts, MatrixError> {
    debug_assert_eq!((dst.rows(), dst.cols()), (rhs.rows(), rhs.cols()));

    for row in 0..dst.rows() {
        for col in 0..dst.cols() {
            let value = op.apply(dst.get(row, col), rhs.get(row, col))?;
            dst.set(row, col, value);
        }
    }
    Ok(OperationCounts::additions(elements(dst.rows(), dst.cols())))
}
