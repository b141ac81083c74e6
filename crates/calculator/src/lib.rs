// Rust guideline compliant 2026-10-12

//! Max-integer calculator.
//!
//! Finds the largest `k` with `0 <= k <= n` and `k mod x == y`.
//! Pure arithmetic: no I/O, no shared state, callable from any thread.
//!
//! Entry points: [`compute_max_k`], [`calculate`].

use domain::{ErrorCode, Operation};

// ---------------------------------------------------------------------------
// CalculatorError
// ---------------------------------------------------------------------------

/// Errors raised by the calculator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    /// An input is outside the calculator's domain.
    #[error("invalid argument (x={x}, y={y}, n={n}): {reason}")]
    InvalidArgument {
        /// Modulus as received.
        x: i64,
        /// Remainder as received.
        y: i64,
        /// Upper bound as received.
        n: i64,
        /// Which precondition failed.
        reason: &'static str,
    },
    /// An intermediate value does not fit in `i64`.
    #[error("arithmetic overflow (x={x}, y={y}, n={n})")]
    Overflow {
        /// Modulus as received.
        x: i64,
        /// Remainder as received.
        y: i64,
        /// Upper bound as received.
        n: i64,
    },
}

impl CalculatorError {
    /// Stable code for this fault.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::Overflow { .. } => ErrorCode::Calculation,
        }
    }
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Compute the maximum `k` in `[0, n]` with `k mod x == y`.
///
/// `n - n % x` is the largest multiple of `x` not above `n`; adding `y` moves
/// to the matching residue. If that overshoots `n`, the previous cycle
/// (`x` lower) is the answer.
///
/// The relation `y < x` is not checked. With `y >= x` the value returned may
/// exceed `n`; with `y > n` it may be negative.
///
/// # Errors
///
/// Returns [`CalculatorError::InvalidArgument`] when any input is negative or
/// `x` is zero, and [`CalculatorError::Overflow`] when `n + y` exceeds `i64`.
pub fn compute_max_k(x: i64, y: i64, n: i64) -> Result<i64, CalculatorError> {
    if x < 0 || y < 0 || n < 0 {
        tracing::error!(x, y, n, "calculator.compute_max_k.invalid_input");
        return Err(CalculatorError::InvalidArgument {
            x,
            y,
            n,
            reason: "x, y and n must be non-negative",
        });
    }
    if x == 0 {
        tracing::error!(x, y, n, "calculator.compute_max_k.zero_modulus");
        return Err(CalculatorError::InvalidArgument {
            x,
            y,
            n,
            reason: "x must be greater than zero",
        });
    }

    let mut k = (n - n % x)
        .checked_add(y)
        .ok_or(CalculatorError::Overflow { x, y, n })?;
    if k > n {
        k -= x;
    }
    tracing::debug!(x, y, n, k, "calculator.compute_max_k");
    Ok(k)
}

/// Run [`compute_max_k`] on the inputs carried by `operation`.
///
/// # Errors
///
/// Same as [`compute_max_k`].
pub fn calculate(operation: &Operation) -> Result<i64, CalculatorError> {
    compute_max_k(operation.x(), operation.y(), operation.n())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Largest k in [0, n] with k % x == y, by exhaustive scan.
    fn brute_force(x: i64, y: i64, n: i64) -> Option<i64> {
        (0..=n).rev().find(|k| k % x == y)
    }

    #[test]
    fn known_values() {
        assert_eq!(compute_max_k(10, 5, 15), Ok(15));
        assert_eq!(compute_max_k(10, 0, 20), Ok(20));
        assert_eq!(compute_max_k(5, 0, 4), Ok(0));
    }

    #[test]
    fn classic_cases() {
        assert_eq!(compute_max_k(7, 5, 12_345), Ok(12_339));
        assert_eq!(compute_max_k(5, 0, 4), Ok(0));
        assert_eq!(compute_max_k(10, 5, 187), Ok(185));
        assert_eq!(compute_max_k(2, 0, 999_999_999), Ok(999_999_998));
        assert_eq!(compute_max_k(499_999_993, 9, 1_000_000_000), Ok(999_999_995));
    }

    #[test]
    fn matches_brute_force_for_small_inputs() {
        for x in 1..=12 {
            for y in 0..x {
                for n in y..=60 {
                    let expected = brute_force(x, y, n);
                    assert_eq!(
                        compute_max_k(x, y, n).ok(),
                        expected,
                        "x={x} y={y} n={n}"
                    );
                }
            }
        }
    }

    #[test]
    fn handles_validated_upper_bound() {
        let max = i64::from(i32::MAX);
        assert_eq!(compute_max_k(1, 0, max), Ok(max));
        assert_eq!(compute_max_k(max, max - 1, max), Ok(max - 1));
        assert_eq!(compute_max_k(max, 0, max), Ok(max));
    }

    #[test]
    fn negative_inputs_are_rejected() {
        for (x, y, n) in [(-1, 0, 0), (1, -1, 0), (1, 0, -1), (-1, -1, -1)] {
            let err = compute_max_k(x, y, n).unwrap_err();
            assert!(
                matches!(err, CalculatorError::InvalidArgument { .. }),
                "({x}, {y}, {n}) gave {err:?}"
            );
            assert_eq!(err.code(), ErrorCode::InvalidArgument);
        }
    }

    #[test]
    fn zero_modulus_is_rejected() {
        let err = compute_max_k(0, 0, 10).unwrap_err();
        assert!(matches!(
            err,
            CalculatorError::InvalidArgument { x: 0, reason: "x must be greater than zero", .. }
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let err = compute_max_k(1, i64::MAX, i64::MAX).unwrap_err();
        assert_eq!(err, CalculatorError::Overflow { x: 1, y: i64::MAX, n: i64::MAX });
        assert_eq!(err.code(), ErrorCode::Calculation);
    }

    // y >= x is not validated; these pin the unguarded behavior.
    #[test]
    fn remainder_not_below_modulus_is_not_corrected() {
        // 0 + 12 > 3, minus 5 -> 7, above n.
        assert_eq!(compute_max_k(5, 12, 3), Ok(7));
        // 0 + 5 > 3, minus 10 -> negative.
        assert_eq!(compute_max_k(10, 5, 3), Ok(-5));
    }

    #[test]
    fn calculate_reads_operation_inputs() {
        assert_eq!(calculate(&Operation::new(10, 5, 15)), Ok(15));
        assert!(calculate(&Operation::new(-1, -1, -1)).is_err());
    }
}
