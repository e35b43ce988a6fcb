//! The immutable period value.

use crate::instant::Instant;
use crate::unit::Unit;

/// A closed interval of time tagged with a unit and a reference instant.
///
/// Both bounds are inclusive. The reference is the instant the period was
/// derived from; navigation and comparisons work on it rather than on the
/// bounds, so `previous(next(p))` returns to the same day of the month
/// where the calendar allows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period {
    start: Instant,
    end: Instant,
    unit: Unit,
    reference: Instant,
}

impl Period {
    /// Assembles a period, ordering the bounds and clamping the reference
    /// into them.
    pub(crate) fn from_parts(start: Instant, end: Instant, unit: Unit, reference: Instant) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            start,
            end,
            unit,
            reference: reference.clamp(start, end),
        }
    }

    /// First instant of the period.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Last instant of the period.
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Unit tag of the period.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Instant the period was built around.
    pub fn reference(&self) -> Instant {
        self.reference
    }

    /// Length of the period in milliseconds, counting both bounds.
    pub fn duration_millis(&self) -> i64 {
        self.start.millis_until(self.end).saturating_add(1)
    }

    /// Returns `true` if `instant` lies within the bounds.
    pub fn contains_instant(&self, instant: Instant) -> bool {
        self.start <= instant && instant <= self.end
    }
}
