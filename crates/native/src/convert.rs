//! Conversions between [`Instant`] and chrono's naive date-times.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tempora_core::Instant;

/// Reads `instant` as a naive date-time. `None` outside chrono's range.
pub fn to_naive(instant: Instant) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp_millis(instant.as_millis()).map(|dt| dt.naive_utc())
}

/// Converts a naive date-time to an instant (sub-millisecond precision is
/// dropped).
pub fn from_naive(dt: NaiveDateTime) -> Instant {
    Instant::from_millis(dt.and_utc().timestamp_millis())
}

/// Midnight at the start of the given civil date.
pub fn ymd(year: i32, month: u32, day: u32) -> Option<Instant> {
    ymd_hms(year, month, day, 0, 0, 0)
}

/// The given civil date and time of day.
pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Instant> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(from_naive)
}
