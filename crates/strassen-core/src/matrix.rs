//! Owned row-major matrix buffer.

use std::fmt;
use std::ops::Index;

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Num};

use crate::error::MatrixError;
use crate::view::{MatrixView, MatrixViewMut};

/// Element type usable by the multiplication engines.
///
/// Arithmetic goes through the checked operations so that an overflowing
/// intermediate surfaces as [`MatrixError::Overflow`].
pub trait Scalar: Copy + Num + CheckedAdd + CheckedSub + CheckedMul + fmt::Debug {}

impl<T: Copy + Num + CheckedAdd + CheckedSub + CheckedMul + fmt::Debug> Scalar for T {}

/// Row-major backing buffer for matrix views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create the identity matrix of the given order.
    #[must_use]
    pub fn identity(order: usize) -> Self {
        let mut m = Self::zeros(order, order);
        for i in 0..order {
            m.set(i, i, T::one());
        }
        m
    }

    /// Wrap a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::BufferLength {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Order of a square matrix, `None` otherwise.
    #[must_use]
    pub fn order(&self) -> Option<usize> {
        self.is_square().then_some(self.rows)
    }

    /// Element at `(row, col)`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < self.cols, "column {col} out of range {}", self.cols);
        self.data[row * self.cols + col]
    }

    /// Overwrite the element at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(col < self.cols, "column {col} out of range {}", self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// View spanning the whole matrix.
    #[must_use]
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView::full(self)
    }

    /// Mutable view spanning the whole matrix.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut::full(self)
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Copy the contents out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    /// True if every element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(num_traits::Zero::is_zero)
    }

    /// Flat row-major contents.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.cols;
        let end = start + self.cols;
        &self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        let m: Matrix<i64> = Matrix::identity(3);
        assert_eq!(m.to_rows(), vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
        assert_eq!(m.order(), Some(3));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1i64, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 2, vec![1i64, 2, 3]).is_err());
        let m = Matrix::from_vec(2, 3, vec![1i64, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.get(1, 2), 6);
        assert_eq!(m.order(), None);
    }

    #[test]
    fn index_returns_row_slice() {
        let m = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
        assert_eq!(&m[1], &[3, 4]);
    }

    #[test]
    fn set_and_zero_check() {
        let mut m: Matrix<i64> = Matrix::zeros(2, 2);
        assert!(m.is_zero());
        m.set(0, 1, 7);
        assert!(!m.is_zero());
        assert_eq!(m.as_slice(), &[0, 7, 0, 0]);
    }

    #[test]
    fn empty_matrix_rows() {
        let m: Matrix<i64> = Matrix::zeros(0, 0);
        assert!(m.to_rows().is_empty());
    }
}
