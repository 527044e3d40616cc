//! Naive cubic matrix multiplication, the baseline for comparison.

use crate::error::MatrixError;
use crate::matrix::{Matrix, Scalar};
use crate::ops::{scalar_product, ElementOp};
use crate::result::{OperationCounts, OperationResult};
use crate::view::MatrixView;

/// Label of naive multiplication results.
pub const NAIVE_LABEL: &str = "Square Matrix Multiply";

/// Multiply an `m x k` view by a `k x p` view with three nested loops.
///
/// Every scalar multiplication is counted; the additions of the dot
/// products are not. Shapes are not validated here; overflow is.
pub fn naive_multiply<'a, T: Scalar>(
    a: MatrixView<'a, T>,
    b: MatrixView<'a, T>,
) -> Result<OperationResult<'a, T>, MatrixError> {
    debug_assert_eq!(a.cols(), b.rows());

    let mut result = Matrix::zeros(a.rows(), b.cols());
    let mut multiplications = 0u64;

    for row in 0..a.rows() {
        for col in 0..b.cols() {
            let mut sum = T::zero();
            for k in 0..a.cols() {
                let product = scalar_product(a.get(row, k), b.get(k, col))?;
                sum = ElementOp::Add.apply(sum, product)?;
                multiplications += 1;
            }
            result.set(row, col, sum);
        }
    }

    Ok(OperationResult {
        label: NAIVE_LABEL,
        lhs: a,
        rhs: b,
        result,
        counts: OperationCounts::multiplications(multiplications),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_2x2() {
        let a = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5i64, 6], vec![7, 8]]).unwrap();
        let r = naive_multiply(a.view(), b.view()).unwrap();
        assert_eq!(r.result.to_rows(), vec![vec![19, 22], vec![43, 50]]);
        assert_eq!(r.multiplications(), 8);
        assert_eq!(r.additions(), 0);
    }

    #[test]
    fn naive_rectangular() {
        // 2x3 * 3x1
        let a = Matrix::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1i64], vec![0], vec![-1]]).unwrap();
        let r = naive_multiply(a.view(), b.view()).unwrap();
        assert_eq!(r.result.to_rows(), vec![vec![-2], vec![-2]]);
        assert_eq!(r.multiplications(), 6);
    }

    #[test]
    fn naive_on_windows() {
        let a = Matrix::from_vec(4, 4, (0..16).collect::<Vec<i64>>()).unwrap();
        let id: Matrix<i64> = Matrix::identity(2);
        let q = a.view().quadrants();
        let r = naive_multiply(q.bottom_left, id.view()).unwrap();
        assert_eq!(r.result.to_rows(), vec![vec![8, 9], vec![12, 13]]);
    }

    #[test]
    fn naive_count_is_cubic() {
        for n in [1usize, 3, 4, 5] {
            let a: Matrix<i64> = Matrix::identity(n);
            let r = naive_multiply(a.view(), a.view()).unwrap();
            assert_eq!(r.multiplications(), (n * n * n) as u64);
        }
    }

    #[test]
    fn naive_overflow_is_an_error() {
        let big = i64::from(i32::MAX);
        let a = Matrix::from_rows(vec![vec![big << 16, big << 16]; 2]).unwrap();
        let err = naive_multiply(a.view(), a.view()).unwrap_err();
        assert_eq!(err, MatrixError::Overflow("Multiplication"));

        // Products fit, their sum does not
        let half = Matrix::from_rows(vec![vec![i64::MAX / 2 + 1, i64::MAX / 2 + 1]]).unwrap();
        let ones = Matrix::from_rows(vec![vec![1i64], vec![1]]).unwrap();
        let err = naive_multiply(half.view(), ones.view()).unwrap_err();
        assert_eq!(err, MatrixError::Overflow("Addition"));
    }
}
