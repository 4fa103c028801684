use chrono::Duration;

use crate::time::duration::{round_nanos, round_nanos_digits};

/// Rounding for duration types that can be expressed as nanoseconds.
///
/// Durations whose nanosecond count does not fit an `i64` (about 292 years)
/// are returned unchanged, as is everything rounded to such a step.
pub trait RoundDuration: Sized {
    /// Rounds to the nearest multiple of `step`, halfway values away from zero.
    fn round_to(self, step: Self) -> Self;

    /// Rounds to `digits` significant figures of the `h`/`m`/`s` rendering.
    fn round_to_significant_digits(self, digits: i32) -> Self;
}

impl RoundDuration for Duration {
    fn round_to(self, step: Self) -> Self {
        match (self.num_nanoseconds(), step.num_nanoseconds()) {
            (Some(nanos), Some(step)) => Duration::nanoseconds(round_nanos(nanos, step)),
            _ => self
        }
    }

    fn round_to_significant_digits(self, digits: i32) -> Self {
        self.num_nanoseconds()
            .map_or(self, |nanos| Duration::nanoseconds(round_nanos_digits(nanos, digits)))
    }
}

impl RoundDuration for std::time::Duration {
    fn round_to(self, step: Self) -> Self {
        match (std_nanos(self), std_nanos(step)) {
            (Some(nanos), Some(step)) => from_std_nanos(round_nanos(nanos, step)).unwrap_or(self),
            _ => self
        }
    }

    fn round_to_significant_digits(self, digits: i32) -> Self {
        std_nanos(self)
            .and_then(|nanos| from_std_nanos(round_nanos_digits(nanos, digits)))
            .unwrap_or(self)
    }
}

fn std_nanos(d: std::time::Duration) -> Option<i64> {
    i64::try_from(d.as_nanos()).ok()
}

fn from_std_nanos(nanos: i64) -> Option<std::time::Duration> {
    u64::try_from(nanos).ok().map(std::time::Duration::from_nanos)
}

/// Returns the result of rounding `d` to the nearest multiple of `step`.
/// If `step` is 1ns or less, returns `d` unchanged.
#[inline]
pub fn round_duration(d: Duration, step: Duration) -> Duration {
    d.round_to(step)
}

/// Returns the result of rounding `d` to `digits` significant figures for
/// standard `h`/`m`/`s` rendering. If `digits <= 0`, returns `d` unchanged.
///
/// ```
/// use chrono::Duration;
/// use rounding::time::roundduration::round_duration_digits;
///
/// let d = Duration::hours(1) + Duration::minutes(35) + Duration::milliseconds(42_567);
/// assert_eq!(round_duration_digits(d, 3), Duration::hours(1) + Duration::minutes(36));
/// assert_eq!(round_duration_digits(Duration::microseconds(1_567), 3), Duration::microseconds(1_570));
/// ```
#[inline]
pub fn round_duration_digits(d: Duration, digits: i32) -> Duration {
    d.round_to_significant_digits(digits)
}
