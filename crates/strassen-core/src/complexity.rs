//! Closed forms of the operation counts, for checking measured counts.

use crate::constants::{STRASSEN_PASSES_PER_LEVEL, STRASSEN_SUBPRODUCTS};

#[allow(clippy::cast_possible_truncation)]
fn as_count(n: usize) -> u64 {
    n as u64
}

/// Multiplications of the naive algorithm for order `n`: `n^3`.
#[must_use]
pub fn naive_multiplications(n: usize) -> u64 {
    as_count(n).pow(3)
}

/// Multiplications of Strassen for a power-of-two order `n`:
/// `M(n) = 7 M(n/2)`, `M(1) = 1`, i.e. `7^log2(n)`.
#[must_use]
pub fn strassen_multiplications(n: usize) -> u64 {
    debug_assert!(n.is_power_of_two());
    STRASSEN_SUBPRODUCTS.pow(n.trailing_zeros())
}

/// Additions of Strassen for a power-of-two order `n`:
/// `A(n) = 7 A(n/2) + 18 (n/2)^2`, `A(1) = 0`.
#[must_use]
pub fn strassen_additions(n: usize) -> u64 {
    debug_assert!(n.is_power_of_two());
    let mut additions = 0u64;
    let mut order = 2usize;
    while order <= n {
        let half = as_count(order / 2);
        additions = STRASSEN_SUBPRODUCTS * additions + STRASSEN_PASSES_PER_LEVEL * half * half;
        order *= 2;
    }
    additions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_cubes() {
        assert_eq!(naive_multiplications(1), 1);
        assert_eq!(naive_multiplications(2), 8);
        assert_eq!(naive_multiplications(1024), 1_073_741_824);
    }

    #[test]
    fn strassen_multiplication_powers_of_seven() {
        assert_eq!(strassen_multiplications(1), 1);
        assert_eq!(strassen_multiplications(2), 7);
        assert_eq!(strassen_multiplications(4), 49);
        assert_eq!(strassen_multiplications(1024), 282_475_249);
    }

    #[test]
    fn strassen_addition_recurrence() {
        assert_eq!(strassen_additions(1), 0);
        assert_eq!(strassen_additions(2), 18);
        assert_eq!(strassen_additions(4), 198);
        assert_eq!(strassen_additions(8), 7 * 198 + 18 * 16);
    }

    #[test]
    fn strassen_beats_naive_from_order_two() {
        for power in 1..11 {
            let n = 1usize << power;
            assert!(strassen_multiplications(n) < naive_multiplications(n));
        }
    }
}
