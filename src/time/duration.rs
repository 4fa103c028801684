//! Rounding of signed nanosecond counts.
//!
//! Significant digits of a duration are counted the way a duration reads in
//! `1h35m42.567s` form: hours first, then minutes, then seconds with their
//! fraction.

use crate::math::pow10::{MAX_U64_EXPONENT, digit_count_u64, scale_u64};
use crate::math::roundhalfup::RoundHalfUp;

pub const NANOSECOND: i64 = 1;
pub const MICROSECOND: i64 = 1_000 * NANOSECOND;
pub const MILLISECOND: i64 = 1_000 * MICROSECOND;
pub const SECOND: i64 = 1_000 * MILLISECOND;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;

const HOUR_NANOS: u64 = HOUR as u64;
const MINUTE_NANOS: u64 = MINUTE as u64;
// seconds fill two digits below the minutes
const SECONDS_FIELD_NANOS: u64 = 100 * SECOND as u64;

/// Returns the result of rounding `nanos` to the nearest multiple of `step`.
/// If `step <= 1`, returns `nanos` unchanged.
///
/// ```
/// use rounding::time::duration::{round_nanos, MINUTE, SECOND};
///
/// assert_eq!(round_nanos(34_560 * SECOND / 1_000, 10 * SECOND), 30 * SECOND);
/// assert_eq!(round_nanos(-90 * SECOND, MINUTE), -2 * MINUTE);
/// ```
#[inline]
pub fn round_nanos(nanos: i64, step: i64) -> i64 {
    nanos.round_to_step(step)
}

/// Returns the result of rounding `nanos` to `digits` significant decimal
/// figures of its `h`/`m`/`s` rendering. If `digits <= 0`, returns `nanos`
/// unchanged.
///
/// ```
/// use rounding::time::duration::{round_nanos_digits, HOUR, MINUTE, MILLISECOND, SECOND};
///
/// let d = HOUR + 35 * MINUTE + 42_567 * MILLISECOND;
/// assert_eq!(round_nanos_digits(d, 1), 2 * HOUR);
/// assert_eq!(round_nanos_digits(d, 2), HOUR + 40 * MINUTE);
/// assert_eq!(round_nanos_digits(-41_500_000, 2), -42 * MILLISECOND);
/// ```
pub fn round_nanos_digits(nanos: i64, digits: i32) -> i64 {
    if digits <= 0 {
        return nanos;
    }
    let step = significant_step(nanos.unsigned_abs(), digits);
    // every step is at most 10^6 hours, well inside i64
    nanos.round_to_step(step as i64)
}

/// Step that keeps `digits` significant figures of a duration whose
/// magnitude is `magnitude` nanoseconds. Returns 0 when nothing is rounded.
fn significant_step(magnitude: u64, digits: i32) -> u64 {
    if magnitude >= HOUR_NANOS {
        let k = digit_count_u64(magnitude / HOUR_NANOS) as i32;
        if k >= digits {
            return scaled_step(HOUR_NANOS, k - digits);
        }
        return sub_unit_step(magnitude % HOUR_NANOS, digits - k);
    }
    if magnitude >= MINUTE_NANOS {
        return sub_unit_step(magnitude, digits);
    }
    let exponent = digit_count_u64(magnitude) as i32 - digits;
    if exponent > 0 {
        scaled_step(1, exponent)
    } else {
        0
    }
}

/// Step for a magnitude below one hour, spending `digits` on minutes first
/// and the rest on seconds.
fn sub_unit_step(magnitude: u64, digits: i32) -> u64 {
    let k = digit_count_u64(magnitude / MINUTE_NANOS) as i32;
    if k >= digits {
        scaled_step(MINUTE_NANOS, k - digits)
    } else {
        scaled_step(SECONDS_FIELD_NANOS, k - digits)
    }
}

fn scaled_step(base: u64, exponent: i32) -> u64 {
    if exponent < -(MAX_U64_EXPONENT as i32) {
        0
    } else {
        scale_u64(base, exponent)
    }
}
