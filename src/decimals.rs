//! Decimal precision helpers for displaying and scaling floats.

use crate::Float;

/// Largest exponent `n` for which `10^n` fits in a [`u64`].
pub const MAX_DECIMAL_EXPONENT: u32 = 19;

/// Returns `10^nr_decimals`.
///
/// Negative exponents return `1`. Exponents larger than
/// [`MAX_DECIMAL_EXPONENT`] saturate at [`u64::MAX`]; use
/// [`checked_decimal_factor()`] to detect that.
///
/// ```
/// # use rules_float::decimal_factor;
/// assert_eq!(decimal_factor(0), 1);
/// assert_eq!(decimal_factor(3), 1000);
/// assert_eq!(decimal_factor(-2), 1);
/// ```
pub fn decimal_factor(nr_decimals: i32) -> u64 {
    checked_decimal_factor(nr_decimals).unwrap_or(u64::MAX)
}

/// Returns `10^nr_decimals`, or `None` if it does not fit in a [`u64`].
///
/// Negative exponents return `Some(1)`.
pub fn checked_decimal_factor(nr_decimals: i32) -> Option<u64> {
    match u32::try_from(nr_decimals) {
        Ok(n) => 10_u64.checked_pow(n),
        Err(_) => Some(1),
    }
}

/// Returns how many decimals of `value` are worth displaying.
///
/// Starts from [`Float::NR_DECIMALS`] and drops one decimal for each order of
/// magnitude `value` exceeds 10, but never returns less than 2.
pub fn max_decimals_for<F: Float>(value: F) -> u32 {
    let mut res = F::NR_DECIMALS;
    let mut factor = F::from_u32(1);
    while value / factor > F::TEN && res > 2 {
        factor = factor * F::TEN;
        res -= 1;
    }
    res
}

/// Scales `value` into a fixed-decimal integer with `nr_decimals` decimals,
/// rounding half away from zero.
///
/// Results outside the range of [`i64`] saturate and NaN maps to `0`.
///
/// ```
/// # use rules_float::to_fixed_decimal;
/// assert_eq!(to_fixed_decimal(21.456_f32, 2), 2146);
/// assert_eq!(to_fixed_decimal(-0.5_f64, 0), -1);
/// ```
pub fn to_fixed_decimal<F: Float>(value: F, nr_decimals: u32) -> i64 {
    let factor = decimal_factor(i32::try_from(nr_decimals).unwrap_or(i32::MAX));
    (value.to_f64() * factor as f64).round() as i64
}
