//! Round-half-up rounding of primitive integers.
//!
//! Every integer type is rounded through its `u64` magnitude so signed and
//! unsigned values share one implementation. Ties resolve toward the larger
//! magnitude, so negative ties round away from zero.

use crate::math::pow10::{POW10, digit_count_u64};

/// Rounds `magnitude` to the nearest multiple of `step`, ties going up.
///
/// Returns `Err` with the rounded-down multiple when the rounded-up one would
/// exceed `limit`. `step` must be at least 2.
fn round_magnitude(magnitude: u64, step: u64, limit: u64) -> Result<u64, u64> {
    let rem = magnitude % step;
    let down = magnitude - rem;
    if rem < step - rem {
        return Ok(down);
    }
    match down.checked_add(step) {
        Some(up) if up <= limit => Ok(up),
        _ => Err(down)
    }
}

/// Exponent of the step that keeps `digits` significant digits of a value
/// with `digit_count` digits, or `None` when nothing needs rounding away.
fn significant_exponent(digit_count: u32, digits: i32) -> Option<u32> {
    if digits <= 0 {
        return None;
    }
    let exponent = digit_count as i32 - digits;
    if exponent > 0 {
        Some(exponent as u32)
    } else {
        None
    }
}

/// Round-half-up rounding to a step or to a number of significant digits.
///
/// ```
/// use rounding::math::roundhalfup::RoundHalfUp;
///
/// assert_eq!(7i64.round_to_step(2), 8);
/// assert_eq!((-420i64).round_to_step(25), -425);
/// assert_eq!(12895u32.round_to_significant_digits(2), 13000);
/// ```
pub trait RoundHalfUp: Copy {
    /// Rounds to the nearest multiple of `step`, or `None` if that multiple
    /// is not representable. A `step` of 1 or less leaves the value unchanged.
    fn checked_round_to_step(self, step: Self) -> Option<Self>;

    /// Rounds to the nearest multiple of `step`. A `step` of 1 or less leaves
    /// the value unchanged.
    ///
    /// When the rounded-up multiple is not representable, the nearest
    /// representable multiple (toward zero) is returned instead.
    fn round_to_step(self, step: Self) -> Self;

    /// Number of decimal digits of the magnitude, at least 1.
    fn digit_count(self) -> u32;

    /// `10^exponent` in this type. `exponent` is always below `digit_count`
    /// of some value of the type, so it fits.
    #[doc(hidden)]
    fn pow10_step(exponent: u32) -> Self;

    /// Like [`round_to_significant_digits`](RoundHalfUp::round_to_significant_digits),
    /// returning `None` if the result is not representable.
    fn checked_round_to_significant_digits(self, digits: i32) -> Option<Self> {
        match significant_exponent(self.digit_count(), digits) {
            Some(exponent) => self.checked_round_to_step(Self::pow10_step(exponent)),
            None => Some(self)
        }
    }

    /// Rounds to `digits` significant decimal digits. A `digits` of 0 or less
    /// leaves the value unchanged.
    fn round_to_significant_digits(self, digits: i32) -> Self {
        match significant_exponent(self.digit_count(), digits) {
            Some(exponent) => self.round_to_step(Self::pow10_step(exponent)),
            None => self
        }
    }
}

macro_rules! round_half_up_unsigned {
    ($($ty:ident)+) => {
        $(
        impl RoundHalfUp for $ty {
            fn checked_round_to_step(self, step: Self) -> Option<Self> {
                if step <= 1 {
                    return Some(self);
                }
                round_magnitude(self as u64, step as u64, <$ty>::MAX as u64)
                    .ok()
                    .map(|m| m as $ty)
            }

            fn round_to_step(self, step: Self) -> Self {
                if step <= 1 {
                    return self;
                }
                match round_magnitude(self as u64, step as u64, <$ty>::MAX as u64) {
                    Ok(m) | Err(m) => m as $ty
                }
            }

            fn digit_count(self) -> u32 {
                digit_count_u64(self as u64)
            }

            fn pow10_step(exponent: u32) -> Self {
                POW10[exponent as usize] as $ty
            }
        }
        )+
    }
}

macro_rules! round_half_up_signed {
    ($($ty:ident)+) => {
        $(
        impl RoundHalfUp for $ty {
            fn checked_round_to_step(self, step: Self) -> Option<Self> {
                if step <= 1 {
                    return Some(self);
                }
                self.signed_round(step).ok()
            }

            fn round_to_step(self, step: Self) -> Self {
                if step <= 1 {
                    return self;
                }
                match self.signed_round(step) {
                    Ok(v) | Err(v) => v
                }
            }

            fn digit_count(self) -> u32 {
                digit_count_u64(self.unsigned_abs() as u64)
            }

            fn pow10_step(exponent: u32) -> Self {
                POW10[exponent as usize] as $ty
            }
        }

        impl SignedRound for $ty {
            fn signed_round(self, step: Self) -> Result<Self, Self> {
                let negative = self < 0;
                let limit = if negative {
                    <$ty>::MIN.unsigned_abs() as u64
                } else {
                    <$ty>::MAX as u64
                };
                // magnitudes never exceed `limit`, so the cast back is lossless
                let restore = |m: u64| {
                    if negative {
                        (m as $ty).wrapping_neg()
                    } else {
                        m as $ty
                    }
                };
                round_magnitude(self.unsigned_abs() as u64, step as u64, limit)
                    .map(restore)
                    .map_err(restore)
            }
        }
        )+
    }
}

/// Sign handling around [`round_magnitude`] for signed types.
trait SignedRound: Sized {
    fn signed_round(self, step: Self) -> Result<Self, Self>;
}

round_half_up_unsigned!(u8 u16 u32 u64 usize);
round_half_up_signed!(i8 i16 i32 i64 isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_multiple() {
        assert_eq!(123i64.round_to_step(10), 120);
        assert_eq!(125i64.round_to_step(10), 130);
        assert_eq!(7i64.round_to_step(2), 8);
        assert_eq!(420u64.round_to_step(25), 425);
        assert_eq!(412u64.round_to_step(25), 400);
    }

    #[test]
    fn negative_ties_round_away_from_zero() {
        assert_eq!((-420i64).round_to_step(25), -425);
        assert_eq!((-7i64).round_to_step(2), -8);
        assert_eq!((-412i64).round_to_step(25), -400);
        assert_eq!((-90i32).round_to_step(60), -120);
    }

    #[test]
    fn small_steps_leave_value_unchanged() {
        for step in [-5i64, -1, 0, 1] {
            assert_eq!(1234i64.round_to_step(step), 1234);
            assert_eq!((-1234i64).round_to_step(step), -1234);
        }
        assert_eq!(1234u64.round_to_step(0), 1234);
        assert_eq!(1234u64.round_to_step(1), 1234);
    }

    #[test]
    fn min_value_does_not_overflow() {
        assert_eq!(i64::MIN.round_to_step(2), i64::MIN);
        assert_eq!(i64::MIN.digit_count(), 19);
        assert_eq!(i8::MIN.round_to_step(100), -100);
        assert_eq!(i8::MIN.round_to_step(64), -128);
    }

    #[test]
    fn unrepresentable_round_up_falls_back_to_round_down() {
        assert_eq!(i64::MAX.round_to_step(10), 9_223_372_036_854_775_800);
        assert_eq!(i64::MAX.checked_round_to_step(10), None);
        assert_eq!(u64::MAX.round_to_step(10), 18_446_744_073_709_551_610);
        assert_eq!(u64::MAX.checked_round_to_step(10), None);
        assert_eq!(250u8.round_to_step(100), 200);
        assert_eq!((-125i8).checked_round_to_step(50), None);
        assert_eq!((-125i8).round_to_step(50), -100);
    }

    #[test]
    fn significant_digits() {
        assert_eq!(12895i64.round_to_significant_digits(2), 13000);
        assert_eq!(4213i64.round_to_significant_digits(1), 4000);
        assert_eq!((-567i64).round_to_significant_digits(2), -570);
        assert_eq!(12895u64.round_to_significant_digits(2), 13000);
        assert_eq!(4213u16.round_to_significant_digits(1), 4000);
    }

    #[test]
    fn significant_digits_without_rounding() {
        assert_eq!(4213i64.round_to_significant_digits(4), 4213);
        assert_eq!(4213i64.round_to_significant_digits(10), 4213);
        assert_eq!(4213i64.round_to_significant_digits(0), 4213);
        assert_eq!(4213i64.round_to_significant_digits(-3), 4213);
        assert_eq!(0u64.round_to_significant_digits(1), 0);
    }

    #[test]
    fn significant_digits_at_the_edges() {
        assert_eq!(i64::MIN.round_to_significant_digits(1), -9_000_000_000_000_000_000);
        assert_eq!(u64::MAX.round_to_significant_digits(1), 10_000_000_000_000_000_000);
        assert_eq!(u64::MAX.round_to_significant_digits(2), 18_000_000_000_000_000_000);
        assert_eq!(18_446_000_000_000_000_000u64.checked_round_to_significant_digits(4), None);
        assert_eq!(18_446_000_000_000_000_000u64.round_to_significant_digits(4), 18_440_000_000_000_000_000);
    }

    #[test]
    fn rounding_twice_is_a_no_op() {
        let once = 98_765i64.round_to_step(250);
        assert_eq!(once.round_to_step(250), once);
    }
}
