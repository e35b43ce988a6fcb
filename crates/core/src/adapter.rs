//! The date adapter contract.
//!
//! The period algebra never performs calendar arithmetic itself. Every
//! calendar-aware question (where does this month start, what is one month
//! after the 31st) is delegated to a [`DateAdapter`]. Backends live in
//! their own crates.

use crate::error::PeriodError;
use crate::instant::Instant;
use crate::unit::{Span, Unit};

/// Default cap on the number of instants [`DateAdapter::each_interval`]
/// returns, and on the number of periods a division produces.
pub const DEFAULT_INTERVAL_LIMIT: usize = 1000;

/// First day of the week, `0 = Sunday` through `6 = Saturday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekStart(u8);

impl WeekStart {
    pub const SUNDAY: WeekStart = WeekStart(0);
    pub const MONDAY: WeekStart = WeekStart(1);

    /// Creates a week start from a day index.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidWeekStart`] if `day` is outside 0..=6.
    pub fn new(day: u8) -> Result<Self, PeriodError> {
        if day > 6 {
            return Err(PeriodError::InvalidWeekStart { value: day });
        }
        Ok(Self(day))
    }

    /// Returns the day index.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Days between the week start and `weekday` (both Sunday-based).
    /// `weekday` is taken modulo 7.
    pub fn days_since(self, weekday: u8) -> u8 {
        (weekday % 7 + 7 - self.0) % 7
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        Self::MONDAY
    }
}

/// Options passed to unit-sensitive adapter calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterOptions {
    /// First day of the week for `Week` boundaries.
    pub week_starts_on: WeekStart,
    /// Maximum number of instants `each_interval` may return.
    pub interval_limit: usize,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStart::default(),
            interval_limit: DEFAULT_INTERVAL_LIMIT,
        }
    }
}

/// Calendar primitives the period algebra is built on.
///
/// # Contract
///
/// - `start_of` and `end_of` are idempotent and bracket their input:
///   `start_of(d) <= d <= end_of(d)`. `end_of` is inclusive (the last
///   millisecond of the unit).
/// - `add` and `subtract` are inverses for integral amounts, up to the
///   clamping of days that do not exist in the target month.
/// - `each_interval` returns the ascending unit starts from
///   `start_of(start)` up to and including `end`, at most
///   `options.interval_limit` of them.
/// - Units the adapter does not understand ([`Unit::Custom`],
///   [`Unit::Named`]) are not errors: `start_of`, `end_of` and `add` return
///   the input unchanged, `is_same` compares instants exactly, and
///   `each_interval` yields only `start`.
///
/// Implementations must be free of side effects so the algebra stays pure.
pub trait DateAdapter: Send + Sync {
    /// Returns the first instant of the unit containing `date`.
    fn start_of(&self, date: Instant, unit: &Unit, options: AdapterOptions) -> Instant;

    /// Returns the last instant of the unit containing `date`.
    fn end_of(&self, date: Instant, unit: &Unit, options: AdapterOptions) -> Instant;

    /// Moves `date` forward by `span` (backward for negative amounts).
    fn add(&self, date: Instant, span: &Span) -> Instant;

    /// Moves `date` backward by `span`.
    fn subtract(&self, date: Instant, span: &Span) -> Instant {
        self.add(date, &span.negated())
    }

    /// Returns `true` if `a` and `b` fall in the same `unit`.
    fn is_same(&self, a: Instant, b: Instant, unit: &Unit, options: AdapterOptions) -> bool {
        if !unit.is_builtin() {
            return a == b;
        }
        self.start_of(a, unit, options) == self.start_of(b, unit, options)
    }

    fn is_before(&self, a: Instant, b: Instant) -> bool {
        a < b
    }

    fn is_after(&self, a: Instant, b: Instant) -> bool {
        a > b
    }

    /// Returns the starts of every `unit` overlapping `[start, end]`.
    fn each_interval(
        &self,
        start: Instant,
        end: Instant,
        unit: &Unit,
        options: AdapterOptions,
    ) -> Vec<Instant> {
        let mut out = Vec::new();
        let step = Span::one(unit.clone());
        let mut current = self.start_of(start, unit, options);
        while current <= end && out.len() < options.interval_limit {
            out.push(current);
            let next = self.add(current, &step);
            if next <= current {
                break;
            }
            current = next;
        }
        out
    }
}
