//! # tempora-native
//!
//! Proleptic Gregorian [`DateAdapter`] for tempora, built on
//! [`chrono::NaiveDateTime`].
//!
//! Instants are read as naive wall-clock times: no time zones, no daylight
//! saving, every day is 24 hours. Month and year arithmetic clamps to the
//! last day of the target month (Jan 31 + 1 month = Feb 28/29).
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use tempora_core::{Temporal, TemporalOptions, Unit, to_period};
//! use tempora_native::{NativeAdapter, ymd};
//!
//! let date = ymd(2024, 2, 15).unwrap();
//! let temporal = Temporal::new(
//!     TemporalOptions::new(date).with_adapter(Arc::new(NativeAdapter)),
//! )?;
//! let february = to_period(&temporal, date, &Unit::Month)?;
//! ```

mod convert;

pub use convert::{from_naive, to_naive, ymd, ymd_hms};

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use tempora_core::{AdapterOptions, DateAdapter, Instant, Span, Unit, WeekStart};

/// Calendar backend on chrono's naive date-time arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeAdapter;

impl NativeAdapter {
    /// Creates the adapter.
    pub fn new() -> Self {
        Self
    }
}

impl DateAdapter for NativeAdapter {
    fn start_of(&self, date: Instant, unit: &Unit, options: AdapterOptions) -> Instant {
        to_naive(date)
            .and_then(|dt| floor(dt, unit, options.week_starts_on))
            .map(from_naive)
            .unwrap_or(date)
    }

    fn end_of(&self, date: Instant, unit: &Unit, options: AdapterOptions) -> Instant {
        to_naive(date)
            .and_then(|dt| {
                let start = floor(dt, unit, options.week_starts_on)?;
                shift(start, 1, unit)
            })
            .map(|next_start| from_naive(next_start).add_millis(-1))
            .unwrap_or(date)
    }

    fn add(&self, date: Instant, span: &Span) -> Instant {
        to_naive(date)
            .and_then(|dt| shift(dt, span.amount, &span.unit))
            .map(from_naive)
            .unwrap_or(date)
    }
}

/// Truncates `dt` to the start of `unit`. `None` for units the calendar
/// does not know and for dates outside chrono's range.
fn floor(dt: NaiveDateTime, unit: &Unit, week_start: WeekStart) -> Option<NaiveDateTime> {
    let date = dt.date();
    let day = match unit {
        Unit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)?,
        Unit::Quarter => NaiveDate::from_ymd_opt(date.year(), date.month0() / 3 * 3 + 1, 1)?,
        Unit::Month => date.with_day(1)?,
        Unit::Week => {
            let weekday = date.weekday().num_days_from_sunday() as u8;
            date.checked_sub_days(Days::new(u64::from(week_start.days_since(weekday))))?
        }
        Unit::Day => date,
        Unit::Hour => return dt.with_minute(0)?.with_second(0)?.with_nanosecond(0),
        Unit::Minute => return dt.with_second(0)?.with_nanosecond(0),
        Unit::Second => return dt.with_nanosecond(0),
        Unit::Custom | Unit::Named(_) => return None,
    };
    day.and_hms_opt(0, 0, 0)
}

/// Moves `dt` by `amount` units.
fn shift(dt: NaiveDateTime, amount: i64, unit: &Unit) -> Option<NaiveDateTime> {
    match unit {
        Unit::Year => shift_months(dt, amount.checked_mul(12)?),
        Unit::Quarter => shift_months(dt, amount.checked_mul(3)?),
        Unit::Month => shift_months(dt, amount),
        Unit::Week => dt.checked_add_signed(TimeDelta::try_weeks(amount)?),
        Unit::Day => dt.checked_add_signed(TimeDelta::try_days(amount)?),
        Unit::Hour => dt.checked_add_signed(TimeDelta::try_hours(amount)?),
        Unit::Minute => dt.checked_add_signed(TimeDelta::try_minutes(amount)?),
        Unit::Second => dt.checked_add_signed(TimeDelta::try_seconds(amount)?),
        Unit::Custom | Unit::Named(_) => None,
    }
}

fn shift_months(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        dt.checked_add_months(magnitude)
    } else {
        dt.checked_sub_months(magnitude)
    }
}
