//! Period construction.

use crate::error::PeriodError;
use crate::instant::Instant;
use crate::period::Period;
use crate::temporal::Temporal;
use crate::unit::Unit;

/// Builds the `unit` period containing `instant`.
///
/// The period's reference is `instant` itself, clamped into the built
/// bounds if the unit's build function does not bracket it.
///
/// # Errors
///
/// Returns [`PeriodError::UnknownUnit`] if `unit` is not registered.
/// [`Unit::Custom`] is never registered: custom periods need explicit
/// bounds, see [`create_custom_period`].
pub fn to_period(temporal: &Temporal, instant: Instant, unit: &Unit) -> Result<Period, PeriodError> {
    let definition = temporal.registry().require(unit)?;
    let (start, end) = definition.build(instant, temporal.adapter(), temporal.adapter_options());
    Ok(Period::from_parts(start, end, unit.clone(), instant))
}

/// Builds the day containing `instant`.
pub fn to_period_default(temporal: &Temporal, instant: Instant) -> Result<Period, PeriodError> {
    to_period(temporal, instant, &Unit::Day)
}

/// Builds the `unit` period containing `source`'s reference.
pub fn create_period(temporal: &Temporal, unit: &Unit, source: &Period) -> Result<Period, PeriodError> {
    to_period(temporal, source.reference(), unit)
}

/// Builds a [`Unit::Custom`] period over `[start, end]`.
///
/// The reference is the midpoint, rounded toward `start`. Reversed bounds
/// are swapped.
pub fn create_custom_period(start: Instant, end: Instant) -> Period {
    Period::from_parts(start, end, Unit::Custom, Instant::midpoint(start, end))
}
