//! Moving between granularities around a period's reference.

use crate::error::PeriodError;
use crate::factory::create_period;
use crate::period::Period;
use crate::temporal::Temporal;
use crate::unit::Unit;

/// Returns the `child` period containing `period`'s reference.
///
/// # Errors
///
/// - [`PeriodError::DivisionNotSupported`] if `child` is not a legal
///   division of `period.unit()`.
/// - [`PeriodError::UnknownUnit`] if either unit is not registered.
pub fn zoom_in(temporal: &Temporal, period: &Period, child: &Unit) -> Result<Period, PeriodError> {
    if *period.unit() != Unit::Custom {
        let definition = temporal.registry().require(period.unit())?;
        if !definition.can_divide_into(child) {
            return Err(PeriodError::DivisionNotSupported {
                unit: period.unit().to_string(),
                target: child.to_string(),
            });
        }
    }
    create_period(temporal, child, period)
}

/// Returns the parent-unit period containing `period`'s reference.
///
/// # Errors
///
/// - [`PeriodError::NoParentUnit`] if the unit merges into nothing.
/// - [`PeriodError::UnknownUnit`] if the unit is not registered
///   (including custom periods).
pub fn zoom_out(temporal: &Temporal, period: &Period) -> Result<Period, PeriodError> {
    let definition = temporal.registry().require(period.unit())?;
    let parent = definition
        .merges_into()
        .ok_or_else(|| PeriodError::NoParentUnit {
            unit: period.unit().to_string(),
        })?;
    create_period(temporal, parent, period)
}

/// Returns the `unit` period containing `period`'s reference, for any
/// registered unit.
pub fn zoom_to(temporal: &Temporal, period: &Period, unit: &Unit) -> Result<Period, PeriodError> {
    create_period(temporal, unit, period)
}
