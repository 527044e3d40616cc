//! Operation counts and per-step results.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::matrix::{Matrix, Scalar};
use crate::view::MatrixView;

/// Exact number of scalar operations performed by a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCounts {
    /// Scalar multiplications.
    pub multiplications: u64,
    /// Scalar additions and subtractions.
    pub additions: u64,
}

impl OperationCounts {
    #[must_use]
    pub fn new(multiplications: u64, additions: u64) -> Self {
        Self {
            multiplications,
            additions,
        }
    }

    #[must_use]
    pub fn multiplications(count: u64) -> Self {
        Self::new(count, 0)
    }

    #[must_use]
    pub fn additions(count: u64) -> Self {
        Self::new(0, count)
    }
}

impl Add for OperationCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            multiplications: self.multiplications + rhs.multiplications,
            additions: self.additions + rhs.additions,
        }
    }
}

impl AddAssign for OperationCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for OperationCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Outcome of an allocating arithmetic or multiplication step.
///
/// The operand views borrow the caller's buffers; the result is owned.
#[derive(Debug, Clone)]
pub struct OperationResult<'a, T> {
    /// Which step produced this result.
    pub label: &'static str,
    pub lhs: MatrixView<'a, T>,
    pub rhs: MatrixView<'a, T>,
    pub result: Matrix<T>,
    pub counts: OperationCounts,
}

impl<'a, T: Scalar> OperationResult<'a, T> {
    /// View over the result buffer.
    #[must_use]
    pub fn view(&self) -> MatrixView<'_, T> {
        self.result.view()
    }

    #[must_use]
    pub fn multiplications(&self) -> u64 {
        self.counts.multiplications
    }

    #[must_use]
    pub fn additions(&self) -> u64 {
        self.counts.additions
    }

    /// Drop the operand borrows and keep the product.
    #[must_use]
    pub fn into_result(self) -> Matrix<T> {
        self.result
    }
}
