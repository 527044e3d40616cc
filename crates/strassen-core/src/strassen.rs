//! Strassen's divide-and-conquer matrix multiplication.
//!
//! Each level splits both operands into quadrant views, forms ten
//! sums/differences S1..S10 of half order, recurses on seven products
//! P1..P7 and assembles the four result quadrants in place:
//!
//! ```text
//! C11 = P5 + P4 - P2 + P6
//! C12 = P1 + P2
//! C21 = P3 + P4
//! C22 = P5 + P1 - P3 - P7
//! ```
//!
//! Operation counts follow `M(n) = 7 M(n/2)` and
//! `A(n) = 7 A(n/2) + 18 (n/2)^2` with `M(1) = 1`, `A(1) = 0`.

use crate::error::MatrixError;
use crate::matrix::{Matrix, Scalar};
use crate::ops::{combine, combine_assign, combine_into, scalar_product, ElementOp};
use crate::result::{OperationCounts, OperationResult};
use crate::view::MatrixView;

/// Label of Strassen multiplication results.
pub const STRASSEN_LABEL: &str = "Strassen";

/// Label of the 1x1 terminal step.
pub const BASE_CASE_LABEL: &str = "Base case multiplication";

/// Multiply two `n x n` views, `n` a power of two.
///
/// The order is read from `a`. Shapes are not validated here; see
/// [`crate::multiplier::multiply_strassen`] for the checked entry point.
/// Any intermediate that overflows `T` aborts with [`MatrixError::Overflow`].
pub fn strassen_multiply<'a, T: Scalar>(
    a: MatrixView<'a, T>,
    b: MatrixView<'a, T>,
) -> Result<OperationResult<'a, T>, MatrixError> {
    let n = a.rows();
    debug_assert!(n.is_power_of_two(), "order {n} is not a power of two");
    debug_assert!(a.is_square() && b.is_square() && b.rows() == n);

    if n == 1 {
        let mut result = Matrix::zeros(1, 1);
        result.set(0, 0, scalar_product(a.get(0, 0), b.get(0, 0))?);
        return Ok(OperationResult {
            label: BASE_CASE_LABEL,
            lhs: a,
            rhs: b,
            result,
            counts: OperationCounts::multiplications(1),
        });
    }

    let half = n / 2;
    let qa = a.quadrants();
    let qb = b.quadrants();
    let (a11, a12, a21, a22) = (qa.top_left, qa.top_right, qa.bottom_left, qa.bottom_right);
    let (b11, b12, b21, b22) = (qb.top_left, qb.top_right, qb.bottom_left, qb.bottom_right);

    let s1 = combine(b12, b22, ElementOp::Subtract)?;
    let s2 = combine(a11, a12, ElementOp::Add)?;
    let s3 = combine(a21, a22, ElementOp::Add)?;
    let s4 = combine(b21, b11, ElementOp::Subtract)?;
    let s5 = combine(a11, a22, ElementOp::Add)?;
    let s6 = combine(b11, b22, ElementOp::Add)?;
    let s7 = combine(a12, a22, ElementOp::Subtract)?;
    let s8 = combine(b21, b22, ElementOp::Add)?;
    let s9 = combine(a11, a21, ElementOp::Subtract)?;
    let s10 = combine(b11, b12, ElementOp::Add)?;

    let mut counts: OperationCounts = [&s1, &s2, &s3, &s4, &s5, &s6, &s7, &s8, &s9, &s10]
        .iter()
        .map(|s| s.counts)
        .sum();

    let p1 = strassen_multiply(a11, s1.view())?;
    let p2 = strassen_multiply(s2.view(), b22)?;
    let p3 = strassen_multiply(s3.view(), b11)?;
    let p4 = strassen_multiply(a22, s4.view())?;
    let p5 = strassen_multiply(s5.view(), s6.view())?;
    let p6 = strassen_multiply(s7.view(), s8.view())?;
    let p7 = strassen_multiply(s9.view(), s10.view())?;

    counts += [&p1, &p2, &p3, &p4, &p5, &p6, &p7]
        .iter()
        .map(|p| p.counts)
        .sum::<OperationCounts>();

    let mut result = Matrix::zeros(n, n);
    {
        let mut c = result.view_mut();

        let mut c11 = c.window_mut(0, 0, half, half);
        counts += combine_into(p5.view(), p4.view(), &mut c11, ElementOp::Add)?;
        counts += combine_assign(&mut c11, p2.view(), ElementOp::Subtract)?;
        counts += combine_assign(&mut c11, p6.view(), ElementOp::Add)?;

        let mut c12 = c.window_mut(0, half, half, half);
        counts += combine_into(p1.view(), p2.view(), &mut c12, ElementOp::Add)?;

        let mut c21 = c.window_mut(half, 0, half, half);
        counts += combine_into(p3.view(), p4.view(), &mut c21, ElementOp::Add)?;

        let mut c22 = c.window_mut(half, half, half, half);
        counts += combine_into(p5.view(), p1.view(), &mut c22, ElementOp::Add)?;
        counts += combine_assign(&mut c22, p3.view(), ElementOp::Subtract)?;
        counts += combine_assign(&mut c22, p7.view(), ElementOp::Subtract)?;
    }

    Ok(OperationResult {
        label: STRASSEN_LABEL,
        lhs: a,
        rhs: b,
        result,
        counts,
    })
}
