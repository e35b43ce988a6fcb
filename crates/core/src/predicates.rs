//! Pure comparisons on periods.

use crate::instant::Instant;
use crate::period::Period;
use crate::temporal::Temporal;
use crate::unit::Unit;

/// Anything with inclusive bounds that [`contains`] can test.
pub trait Bounded {
    /// Returns `(start, end)`, both inclusive.
    fn bounds(&self) -> (Instant, Instant);
}

impl Bounded for Instant {
    fn bounds(&self) -> (Instant, Instant) {
        (*self, *self)
    }
}

impl Bounded for Period {
    fn bounds(&self) -> (Instant, Instant) {
        (self.start(), self.end())
    }
}

/// Returns `true` if both periods' references fall in the same `unit`.
///
/// A missing period on either side is never the same as anything.
pub fn is_same(temporal: &Temporal, a: Option<&Period>, b: Option<&Period>, unit: &Unit) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => temporal.adapter().is_same(
            a.reference(),
            b.reference(),
            unit,
            temporal.adapter_options(),
        ),
        _ => false,
    }
}

/// Returns `true` if `target` lies entirely within `period`, bounds included.
pub fn contains<T: Bounded + ?Sized>(period: &Period, target: &T) -> bool {
    let (start, end) = target.bounds();
    period.contains_instant(start) && period.contains_instant(end)
}

/// Returns `true` if the reference falls on a Saturday or Sunday.
pub fn is_weekend(period: &Period) -> bool {
    matches!(period.reference().weekday(), 0 | 6)
}

/// Returns `true` if the reference falls on Monday through Friday.
pub fn is_weekday(period: &Period) -> bool {
    !is_weekend(period)
}

/// Returns `true` if `period` shares a day with the `now` cell.
pub fn is_today(temporal: &Temporal, period: &Period) -> bool {
    let now = temporal.now().get();
    is_same(temporal, Some(period), Some(&now), &Unit::Day)
}
