use crate::math::roundhalfup::RoundHalfUp;

/// Returns the result of rounding `v` to the nearest multiple of `step`.
/// If `step <= 1`, returns `v` unchanged.
///
/// Halfway values round up in magnitude:
///
/// ```
/// use rounding::math::round::round_i64;
///
/// assert_eq!(round_i64(7, 2), 8);
/// assert_eq!(round_i64(123, 10), 120);
/// assert_eq!(round_i64(-420, 25), -425);
/// ```
#[inline]
pub fn round_i64(v: i64, step: i64) -> i64 {
    v.round_to_step(step)
}

/// Returns the result of rounding `v` to `digits` significant decimal digits.
/// If `digits <= 0`, returns `v` unchanged.
///
/// ```
/// use rounding::math::round::round_i64_digits;
///
/// assert_eq!(round_i64_digits(12895, 2), 13000);
/// assert_eq!(round_i64_digits(4213, 1), 4000);
/// assert_eq!(round_i64_digits(-567, 2), -570);
/// ```
#[inline]
pub fn round_i64_digits(v: i64, digits: i32) -> i64 {
    v.round_to_significant_digits(digits)
}

/// Returns the result of rounding `v` to the nearest multiple of `step`.
/// If `step <= 1`, returns `v` unchanged.
#[inline]
pub fn round_u64(v: u64, step: u64) -> u64 {
    v.round_to_step(step)
}

/// Returns the result of rounding `v` to `digits` significant decimal digits.
/// If `digits <= 0`, returns `v` unchanged.
#[inline]
pub fn round_u64_digits(v: u64, digits: i32) -> u64 {
    v.round_to_significant_digits(digits)
}
