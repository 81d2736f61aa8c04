//! Signed nanosecond durations used by the evidence and synchrony parameters.
//!
//! Durations reach the parameter set from the wire and from operator files,
//! so zero and negative values must be representable: the validator is the
//! one that rejects them, not the type.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MIN: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MIN;

/// Units in descending order, as used by both `Display` and `FromStr`.
const UNITS: [(&str, i64); 6] = [
    ("h", NANOS_PER_HOUR),
    ("m", NANOS_PER_MIN),
    ("s", NANOS_PER_SEC),
    ("ms", NANOS_PER_MILLI),
    ("us", NANOS_PER_MICRO),
    ("ns", 1),
];

/// A signed span of time with nanosecond resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(NANOS_PER_MILLI))
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(NANOS_PER_SEC))
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(NANOS_PER_HOUR))
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Strictly greater than zero.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Build from the protobuf `(seconds, nanos)` pair, saturating at the
    /// bounds of the nanosecond range.
    pub fn from_seconds_nanos(seconds: i64, nanos: i32) -> Self {
        let total = i128::from(seconds) * i128::from(NANOS_PER_SEC) + i128::from(nanos);
        let clamped = total.clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        Self(clamped as i64)
    }

    /// Split into the protobuf `(seconds, nanos)` pair. Both parts carry the
    /// same sign.
    pub const fn to_seconds_nanos(self) -> (i64, i32) {
        (self.0 / NANOS_PER_SEC, (self.0 % NANOS_PER_SEC) as i32)
    }
}

impl fmt::Display for Duration {
    /// Compact unit form: `48h`, `1h30m`, `2s500ms`, `-1s`, `0s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "0s");
        }
        if self.0 < 0 {
            write!(f, "-")?;
        }
        let mut rest = self.0.unsigned_abs();
        for (suffix, size) in UNITS {
            let size = size as u64;
            let count = rest / size;
            if count > 0 {
                write!(f, "{count}{suffix}")?;
                rest %= size;
            }
        }
        Ok(())
    }
}

/// Failure to parse a human-readable duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration {input:?}: {reason}")]
pub struct ParseDurationError {
    pub input: String,
    pub reason: &'static str,
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| ParseDurationError {
            input: s.to_string(),
            reason,
        };

        let (negative, mut rest) = match s.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if rest.is_empty() {
            return Err(fail("empty"));
        }
        if rest == "0" {
            return Ok(Self::ZERO);
        }

        let mut total: i128 = 0;
        while !rest.is_empty() {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return Err(fail("expected a number"));
            }
            let value: i128 = rest[..digits].parse().map_err(|_| fail("number too large"))?;
            rest = &rest[digits..];

            let unit_len = rest.bytes().take_while(|b| !b.is_ascii_digit()).count();
            let unit = match &rest[..unit_len] {
                "µs" => "us",
                other => other,
            };
            let size = UNITS
                .iter()
                .find(|(suffix, _)| *suffix == unit)
                .map(|(_, size)| *size)
                .ok_or_else(|| fail("unknown or missing unit"))?;
            rest = &rest[unit_len..];

            total = total
                .checked_add(value.saturating_mul(i128::from(size)))
                .ok_or_else(|| fail("out of range"))?;
        }

        if negative {
            total = -total;
        }
        i64::try_from(total)
            .map(Self)
            .map_err(|_| fail("out of range"))
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    /// Accepts the string form or a bare integer number of nanoseconds.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DurationVisitor;

        impl Visitor<'_> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a duration such as \"500ms\" or an integer number of nanoseconds")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
                Ok(Duration(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
                i64::try_from(v)
                    .map(Duration)
                    .map_err(|_| E::custom("duration out of range"))
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_compact_units() {
        assert_eq!(Duration::from_hours(48).to_string(), "48h");
        assert_eq!(Duration::from_millis(500).to_string(), "500ms");
        assert_eq!(Duration::from_millis(2500).to_string(), "2s500ms");
        assert_eq!(Duration::from_secs(-1).to_string(), "-1s");
        assert_eq!(Duration::ZERO.to_string(), "0s");
    }

    #[test]
    fn parse_accepts_combined_units() {
        assert_eq!("1h30m".parse::<Duration>().unwrap(), Duration::from_secs(5400));
        assert_eq!("2s".parse::<Duration>().unwrap(), Duration::from_secs(2));
        assert_eq!("-500ms".parse::<Duration>().unwrap(), Duration::from_millis(-500));
        assert_eq!("0".parse::<Duration>().unwrap(), Duration::ZERO);
        assert_eq!("10µs".parse::<Duration>().unwrap(), Duration::from_nanos(10_000));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Duration>().is_err());
        assert!("5".parse::<Duration>().is_err());
        assert!("5d".parse::<Duration>().is_err());
        assert!("ms".parse::<Duration>().is_err());
        assert!("9999999999999h".parse::<Duration>().is_err());
    }

    #[test]
    fn display_parse_extremes() {
        for d in [Duration::from_nanos(i64::MAX), Duration::from_nanos(i64::MIN + 1)] {
            assert_eq!(d.to_string().parse::<Duration>().unwrap(), d);
        }
    }

    #[test]
    fn seconds_nanos_split_keeps_sign() {
        let d = Duration::from_nanos(-1_500_000_000);
        assert_eq!(d.to_seconds_nanos(), (-1, -500_000_000));
        assert_eq!(Duration::from_seconds_nanos(-1, -500_000_000), d);
    }

    #[test]
    fn seconds_nanos_saturates() {
        assert_eq!(
            Duration::from_seconds_nanos(i64::MAX, 0),
            Duration::from_nanos(i64::MAX)
        );
        assert_eq!(
            Duration::from_seconds_nanos(i64::MIN, 0),
            Duration::from_nanos(i64::MIN)
        );
    }

    #[test]
    fn deserializes_string_or_integer() {
        #[derive(Deserialize)]
        struct Wrapper {
            d: Duration,
        }
        let w: Wrapper = serde_json::from_str(r#"{"d":"2s"}"#).unwrap();
        assert_eq!(w.d, Duration::from_secs(2));
        let w: Wrapper = serde_json::from_str(r#"{"d":172800000000000}"#).unwrap();
        assert_eq!(w.d, Duration::from_hours(48));
    }
}
