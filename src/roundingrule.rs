use chrono::Duration;
use serde::Deserialize;

use crate::math::roundhalfup::RoundHalfUp;
use crate::time::duration::round_nanos_digits;
use crate::time::roundduration::RoundDuration;

/// A configurable rounding policy.
///
/// Deserialized from JSON tagged by `rule_type`, e.g.
/// `{"rule_type": "SignificantDigits", "digits": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "rule_type")]
pub enum RoundingRule {
    /// Nearest multiple of `step`; durations read `step` as nanoseconds.
    Step { step: i64 },
    /// Leading decimal digits of the raw value.
    SignificantDigits { digits: i32 },
    /// Leading digits of the `h`/`m`/`s` rendering; integers are read as nanoseconds.
    DurationSignificantDigits { digits: i32 }
}

impl RoundingRule {
    /// Whether the rule leaves every value unchanged.
    pub fn is_noop(&self) -> bool {
        match self {
            RoundingRule::Step { step } => *step <= 1,
            RoundingRule::SignificantDigits { digits }
            | RoundingRule::DurationSignificantDigits { digits } => *digits <= 0
        }
    }

    pub fn round_i64(&self, v: i64) -> i64 {
        match *self {
            RoundingRule::Step { step } => v.round_to_step(step),
            RoundingRule::SignificantDigits { digits } => v.round_to_significant_digits(digits),
            RoundingRule::DurationSignificantDigits { digits } => round_nanos_digits(v, digits)
        }
    }

    pub fn round_u64(&self, v: u64) -> u64 {
        match *self {
            // a negative step is a no-op, same as 0 or 1
            RoundingRule::Step { step } => v.round_to_step(u64::try_from(step).unwrap_or(0)),
            RoundingRule::SignificantDigits { digits } => v.round_to_significant_digits(digits),
            RoundingRule::DurationSignificantDigits { digits } => i64::try_from(v)
                .ok()
                .and_then(|nanos| u64::try_from(round_nanos_digits(nanos, digits)).ok())
                .unwrap_or(v)
        }
    }

    pub fn round_duration(&self, d: Duration) -> Duration {
        match *self {
            RoundingRule::Step { step } => d.round_to(Duration::nanoseconds(step)),
            RoundingRule::SignificantDigits { digits } => d
                .num_nanoseconds()
                .map_or(d, |nanos| Duration::nanoseconds(nanos.round_to_significant_digits(digits))),
            RoundingRule::DurationSignificantDigits { digits } => d.round_to_significant_digits(digits)
        }
    }

    pub fn round_std_duration(&self, d: std::time::Duration) -> std::time::Duration {
        let Ok(nanos) = i64::try_from(d.as_nanos()) else {
            return d;
        };
        u64::try_from(self.round_i64(nanos))
            .map_or(d, std::time::Duration::from_nanos)
    }
}
