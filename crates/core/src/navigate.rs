//! Unit-aware navigation between adjacent periods.

use tracing::debug;

use crate::error::PeriodError;
use crate::factory::to_period;
use crate::period::Period;
use crate::temporal::Temporal;
use crate::unit::{Span, Unit};

/// Returns the period after `period`, with the same unit.
///
/// # Errors
///
/// Returns [`PeriodError::UnknownUnit`] if the unit is not registered.
pub fn next(temporal: &Temporal, period: &Period) -> Result<Period, PeriodError> {
    step(temporal, period, 1)
}

/// Returns the period before `period`, with the same unit.
///
/// # Errors
///
/// Returns [`PeriodError::UnknownUnit`] if the unit is not registered.
pub fn previous(temporal: &Temporal, period: &Period) -> Result<Period, PeriodError> {
    step(temporal, period, -1)
}

/// Applies [`next`] (positive `steps`) or [`previous`] (negative `steps`)
/// `|steps|` times. Zero returns the period unchanged.
///
/// # Errors
///
/// Returns [`PeriodError::UnknownUnit`] if the unit is not registered.
pub fn go(temporal: &Temporal, period: &Period, steps: i64) -> Result<Period, PeriodError> {
    let direction = steps.signum();
    let mut current = period.clone();
    for _ in 0..steps.unsigned_abs() {
        current = step(temporal, &current, direction)?;
    }
    debug!(steps, unit = %period.unit(), "navigated");
    Ok(current)
}

/// Moves one unit in `direction` (`1` or `-1`).
///
/// Calendar units shift the reference with the adapter and rebuild, so
/// month and year lengths come from the calendar. Extension units step
/// over their own boundary. Custom periods shift by their own length.
fn step(temporal: &Temporal, period: &Period, direction: i64) -> Result<Period, PeriodError> {
    let unit = period.unit();
    match unit {
        Unit::Custom => {
            let offset = period.duration_millis().saturating_mul(direction);
            Ok(Period::from_parts(
                period.start().add_millis(offset),
                period.end().add_millis(offset),
                Unit::Custom,
                period.reference().add_millis(offset),
            ))
        }
        _ if unit.is_builtin() => {
            let span = Span::new(direction, unit.clone());
            let reference = temporal.adapter().add(period.reference(), &span);
            to_period(temporal, reference, unit)
        }
        _ => {
            let definition = temporal.registry().require(unit)?;
            let cursor = if direction > 0 {
                period.end().add_millis(1)
            } else {
                period.start().add_millis(-1)
            };
            let (start, end) =
                definition.build(cursor, temporal.adapter(), temporal.adapter_options());
            Ok(Period::from_parts(start, end, unit.clone(), cursor))
        }
    }
}
