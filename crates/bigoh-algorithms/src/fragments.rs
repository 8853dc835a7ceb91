//! Loop fragments with known asymptotic cost.
//!
//! Every inner iteration adds `step` to an accumulator through
//! [`black_box`] so the optimizer cannot collapse the nest into a
//! closed form. With `step == 1` each fragment returns its iteration count.

use std::hint::black_box;

/// `for i < n`: O(n).
pub fn linear(n: u64, step: i64) -> i64 {
    let mut sum = 0i64;
    for _ in 0..n {
        sum = black_box(sum.wrapping_add(step));
    }
    sum
}

/// `for i < n, j < n, k < n`: O(n^3).
pub fn cubic(n: u64, step: i64) -> i64 {
    let mut sum = 0i64;
    for _ in 0..n {
        for _ in 0..n {
            for _ in 0..n {
                sum = black_box(sum.wrapping_add(step));
            }
        }
    }
    sum
}

/// `for i < n, j < n`: O(n^2).
pub fn quadratic(n: u64, step: i64) -> i64 {
    let mut sum = 0i64;
    for _ in 0..n {
        for _ in 0..n {
            sum = black_box(sum.wrapping_add(step));
        }
    }
    sum
}

/// `for i < n, j < i`: O(n^2), half the work of [`quadratic`].
pub fn triangular(n: u64, step: i64) -> i64 {
    let mut sum = 0i64;
    for i in 0..n {
        for _ in 0..i {
            sum = black_box(sum.wrapping_add(step));
        }
    }
    sum
}

/// `for i < n, j < i*i, k < j`: O(n^5).
pub fn quintic(n: u64, step: i64) -> i64 {
    let mut sum = 0i64;
    for i in 0..n {
        for j in 0..i.saturating_mul(i) {
            for _ in 0..j {
                sum = black_box(sum.wrapping_add(step));
            }
        }
    }
    sum
}

/// `for i < n, j < i*i, if j % i == 0 { k < j }`: O(n^4).
///
/// Only one `j` in `i` reaches the innermost loop.
pub fn sparse_quartic(n: u64, step: i64) -> i64 {
    let mut sum = 0i64;
    for i in 0..n {
        // i == 0 has an empty j range, so the modulo never sees zero.
        for j in 0..i.saturating_mul(i) {
            if j % i == 0 {
                for _ in 0..j {
                    sum = black_box(sum.wrapping_add(step));
                }
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_counts() {
        for n in [0u64, 1, 2, 5, 9] {
            let ni = n as i64;
            assert_eq!(linear(n, 1), ni);
            assert_eq!(quadratic(n, 1), ni * ni);
            assert_eq!(cubic(n, 1), ni * ni * ni);
            assert_eq!(triangular(n, 1), ni * (ni - 1).max(0) / 2);

            let quintic_expected: i64 = (0..ni).map(|i| i * i * (i * i - 1).max(0) / 2).sum();
            assert_eq!(quintic(n, 1), quintic_expected);

            // j = m * i for m < i, so the inner work is i * (0 + 1 + .. + (i - 1)).
            let quartic_expected: i64 = (0..ni).map(|i| i * i * (i - 1).max(0) / 2).sum();
            assert_eq!(sparse_quartic(n, 1), quartic_expected);
        }
    }

    #[test]
    fn test_step_scales_result() {
        assert_eq!(linear(10, 7), 70);
        assert_eq!(quadratic(4, 3), 48);
    }
}
