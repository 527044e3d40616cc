//! Checked multiplication entry points and the `Multiplier` trait.
//!
//! The view-level engines in [`crate::naive`] and [`crate::strassen`] trust
//! their callers. The functions here validate shapes first and fail fast with
//! a [`MatrixError`] instead of producing an undefined product.

use crate::error::MatrixError;
use crate::matrix::{Matrix, Scalar};
use crate::naive::naive_multiply;
use crate::result::OperationResult;
use crate::strassen::strassen_multiply;

/// A matrix multiplication algorithm with operation accounting.
pub trait Multiplier<T: Scalar>: Send + Sync {
    /// Multiply `a` by `b`.
    fn multiply<'a>(
        &self,
        a: &'a Matrix<T>,
        b: &'a Matrix<T>,
    ) -> Result<OperationResult<'a, T>, MatrixError>;

    /// Display name of the algorithm.
    fn name(&self) -> &'static str;
}

/// Naive cubic multiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMultiplier;

impl<T: Scalar> Multiplier<T> for NaiveMultiplier {
    fn multiply<'a>(
        &self,
        a: &'a Matrix<T>,
        b: &'a Matrix<T>,
    ) -> Result<OperationResult<'a, T>, MatrixError> {
        multiply_naive(a, b)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// Strassen divide-and-conquer multiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrassenMultiplier;

impl<T: Scalar> Multiplier<T> for StrassenMultiplier {
    fn multiply<'a>(
        &self,
        a: &'a Matrix<T>,
        b: &'a Matrix<T>,
    ) -> Result<OperationResult<'a, T>, MatrixError> {
        multiply_strassen(a, b)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

/// All algorithms, in report order.
#[must_use]
pub fn default_multipliers<T: Scalar>() -> Vec<Box<dyn Multiplier<T>>> {
    vec![Box::new(NaiveMultiplier), Box::new(StrassenMultiplier)]
}

/// Naive product of an `m x k` and a `k x p` matrix.
pub fn multiply_naive<'a, T: Scalar>(
    a: &'a Matrix<T>,
    b: &'a Matrix<T>,
) -> Result<OperationResult<'a, T>, MatrixError> {
    if a.cols() != b.rows() {
        return Err(mismatch(a, b));
    }
    let result = naive_multiply(a.view(), b.view())?;
    tracing::debug!(
        rows = a.rows(),
        cols = b.cols(),
        multiplications = result.multiplications(),
        "naive multiplication complete"
    );
    Ok(result)
}

/// Strassen product of two square matrices of the same power-of-two order.
pub fn multiply_strassen<'a, T: Scalar>(
    a: &'a Matrix<T>,
    b: &'a Matrix<T>,
) -> Result<OperationResult<'a, T>, MatrixError> {
    let order = a.order().ok_or(MatrixError::NotSquare {
        rows: a.rows(),
        cols: a.cols(),
    })?;
    if b.order() != Some(order) {
        return Err(mismatch(a, b));
    }
    if !order.is_power_of_two() {
        return Err(MatrixError::NotPowerOfTwo(order));
    }

    let result = strassen_multiply(a.view(), b.view())?;
    tracing::debug!(
        order,
        multiplications = result.multiplications(),
        additions = result.additions(),
        "strassen multiplication complete"
    );
    Ok(result)
}

fn mismatch<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> MatrixError {
    MatrixError::DimensionMismatch {
        lhs_rows: a.rows(),
        lhs_cols: a.cols(),
        rhs_rows: b.rows(),
        rhs_cols: b.cols(),
    }
}

/// Check that every named product equals the first one.
pub fn compare_results<T: Scalar>(results: &[(&str, &Matrix<T>)]) -> Result<(), MatrixError> {
    let Some(((first_name, first), rest)) = results.split_first() else {
        return Err(MatrixError::NoResults);
    };
    for (name, product) in rest {
        if product != first {
            tracing::warn!(first = *first_name, other = *name, "products differ");
            return Err(MatrixError::Mismatch(
                (*first_name).to_string(),
                (*name).to_string(),
            ));
        }
    }
    Ok(())
}
