//! Naive wall-clock instants with millisecond resolution.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// A point on the naive (zone-less) timeline.
///
/// Stored as signed milliseconds since `1970-01-01T00:00:00`. Calendar
/// semantics live in a [`DateAdapter`](crate::DateAdapter); this type only
/// supports the arithmetic the period algebra needs directly: ordering,
/// millisecond offsets, midpoints and day of week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    /// The Unix epoch, `1970-01-01T00:00:00`.
    pub const EPOCH: Instant = Instant(0);

    /// Creates an instant from milliseconds since the epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns milliseconds since the epoch.
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Reads the system clock, treating UTC as the wall clock.
    pub fn now() -> Self {
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_millis())
                .map(|m| -m)
                .unwrap_or(i64::MIN),
        };
        Self(millis)
    }

    /// Returns this instant shifted by `millis` (saturating at the range ends).
    pub const fn add_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Returns the signed number of milliseconds from `self` to `other`.
    pub const fn millis_until(self, other: Instant) -> i64 {
        other.0.saturating_sub(self.0)
    }

    /// Returns the instant halfway between `a` and `b`, rounded toward the
    /// earlier of the two.
    pub fn midpoint(a: Instant, b: Instant) -> Instant {
        let (lo, hi) = if a <= b { (a.0, b.0) } else { (b.0, a.0) };
        // Widen to avoid overflow near the ends of the range.
        let mid = (i128::from(lo) + i128::from(hi)).div_euclid(2);
        Instant(mid as i64)
    }

    /// Returns the day of week, `0 = Sunday` through `6 = Saturday`.
    pub fn weekday(self) -> u8 {
        let days = self.0.div_euclid(MILLIS_PER_DAY);
        // 1970-01-01 was a Thursday.
        (days + 4).rem_euclid(7) as u8
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl From<i64> for Instant {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}
