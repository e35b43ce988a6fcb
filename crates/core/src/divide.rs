//! Partitioning periods: unit division and free-form splits.

use tracing::{debug, warn};

use crate::error::PeriodError;
use crate::factory::{create_custom_period, to_period};
use crate::period::Period;
use crate::registry::UnitDefinition;
use crate::temporal::Temporal;
use crate::unit::{Span, Unit};

/// How [`split`] should partition a period. The modes are exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOptions {
    /// One period per `unit`, as [`divide`].
    By(Unit),
    /// `n` equal-length custom slices; the last absorbs the remainder.
    Count(usize),
    /// Consecutive custom slices of `span`; the last is clipped to the end.
    Duration(Span),
}

/// Divides `period` into the `child` periods that tile it.
///
/// Registered periods may only be divided into a unit listed in their
/// definition's `divisible_into`, and only when the `child` periods line up
/// with both bounds under the current week start. Custom periods accept any
/// registered unit; child periods sticking out past either bound are cut
/// back to it and become custom slices. Built-in targets are enumerated
/// with the adapter's `each_interval`, extension targets by chaining their
/// build function from `period.start()`. At most
/// `temporal.interval_limit()` periods are returned.
///
/// # Errors
///
/// - [`PeriodError::UnknownUnit`] if either unit is not registered.
/// - [`PeriodError::DivisionNotSupported`] if `child` is not a legal
///   child of `period.unit()`, is [`Unit::Custom`], or does not tile the
///   registered period exactly.
#[tracing::instrument(skip(temporal, period), fields(unit = %period.unit()))]
pub fn divide(temporal: &Temporal, period: &Period, child: &Unit) -> Result<Vec<Period>, PeriodError> {
    if *child == Unit::Custom {
        return Err(not_supported(period.unit(), child));
    }
    let registry = temporal.registry();
    if *period.unit() != Unit::Custom {
        let definition = registry.require(period.unit())?;
        if !definition.can_divide_into(child) {
            return Err(not_supported(period.unit(), child));
        }
    }
    let child_definition = registry.require(child)?;
    let limit = temporal.interval_limit();

    let mut periods = if child.is_builtin() {
        temporal
            .adapter()
            .each_interval(period.start(), period.end(), child, temporal.adapter_options())
            .into_iter()
            .map(|instant| to_period(temporal, instant, child))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        chain_unit(temporal, child_definition, child, period)
    };

    let truncated =
        periods.len() >= limit && periods.last().is_some_and(|p| p.end() < period.end());
    if truncated {
        warn!(limit, "division truncated at interval limit");
    }

    if *period.unit() == Unit::Custom {
        clip_to_bounds(&mut periods, period);
    } else if !tiles(&periods, period, truncated) {
        return Err(not_supported(period.unit(), child));
    }
    debug!(count = periods.len(), "divided");
    Ok(periods)
}

/// Splits `period` according to `options`.
///
/// The returned periods are contiguous, do not overlap, and together cover
/// `[period.start(), period.end()]` (subject to the interval limit).
///
/// # Errors
///
/// - The errors of [`divide`] for [`SplitOptions::By`].
/// - [`PeriodError::InvalidSplit`] for a zero count, a count larger than
///   the period's millisecond length or the interval limit, or a span that
///   does not move forward.
#[tracing::instrument(skip(temporal, period), fields(unit = %period.unit()))]
pub fn split(
    temporal: &Temporal,
    period: &Period,
    options: &SplitOptions,
) -> Result<Vec<Period>, PeriodError> {
    match options {
        SplitOptions::By(unit) => divide(temporal, period, unit),
        SplitOptions::Count(count) => split_count(temporal, period, *count),
        SplitOptions::Duration(span) => split_duration(temporal, period, span),
    }
}

fn split_count(temporal: &Temporal, period: &Period, count: usize) -> Result<Vec<Period>, PeriodError> {
    if count == 0 {
        return Err(invalid_split("count must be >= 1"));
    }
    if count > temporal.interval_limit() {
        return Err(invalid_split(format!(
            "count {count} exceeds the interval limit {}",
            temporal.interval_limit()
        )));
    }
    let total = period.duration_millis();
    let n = i64::try_from(count).unwrap_or(i64::MAX);
    if n > total {
        return Err(invalid_split(format!(
            "cannot cut {total} ms into {count} slices"
        )));
    }

    let width = total / n;
    let mut slices = Vec::with_capacity(count);
    for i in 0..n {
        let start = period.start().add_millis(i * width);
        let end = if i == n - 1 {
            period.end()
        } else {
            start.add_millis(width - 1)
        };
        slices.push(create_custom_period(start, end));
    }
    Ok(slices)
}

fn split_duration(temporal: &Temporal, period: &Period, span: &Span) -> Result<Vec<Period>, PeriodError> {
    let adapter = temporal.adapter();
    let limit = temporal.interval_limit();
    let mut slices = Vec::new();
    let mut cursor = period.start();
    while cursor <= period.end() {
        if slices.len() >= limit {
            warn!(limit, "split truncated at interval limit");
            break;
        }
        let next = adapter.add(cursor, span);
        if next <= cursor {
            return Err(invalid_split(format!(
                "a span of {} {} does not advance",
                span.amount, span.unit
            )));
        }
        let end = next.add_millis(-1).min(period.end());
        slices.push(create_custom_period(cursor, end));
        cursor = next;
    }
    Ok(slices)
}

/// Tiles `period` with consecutive `unit` periods built from its definition.
fn chain_unit(
    temporal: &Temporal,
    definition: &UnitDefinition,
    unit: &Unit,
    period: &Period,
) -> Vec<Period> {
    let limit = temporal.interval_limit();
    let mut periods = Vec::new();
    let mut cursor = period.start();
    while cursor <= period.end() && periods.len() < limit {
        let (start, end) = definition.build(cursor, temporal.adapter(), temporal.adapter_options());
        periods.push(Period::from_parts(start, end, unit.clone(), cursor));
        let next = end.max(cursor).add_millis(1);
        if next <= cursor {
            break;
        }
        cursor = next;
    }
    periods
}

/// Returns `true` if `parts` start at `period.start()` and, unless the run
/// was cut at the interval limit, end at `period.end()`.
fn tiles(parts: &[Period], period: &Period, truncated: bool) -> bool {
    match (parts.first(), parts.last()) {
        (Some(first), Some(last)) => {
            first.start() == period.start()
                && (last.end() == period.end() || truncated)
        }
        _ => false,
    }
}

/// Cuts the edge pieces back to `period`'s bounds.
fn clip_to_bounds(parts: &mut [Period], period: &Period) {
    if let Some(first) = parts.first_mut() {
        if first.start() < period.start() {
            *first = create_custom_period(period.start(), first.end().min(period.end()));
        }
    }
    if let Some(last) = parts.last_mut() {
        if last.end() > period.end() {
            *last = create_custom_period(last.start().max(period.start()), period.end());
        }
    }
}

fn not_supported(unit: &Unit, target: &Unit) -> PeriodError {
    PeriodError::DivisionNotSupported {
        unit: unit.to_string(),
        target: target.to_string(),
    }
}

fn invalid_split(reason: impl Into<String>) -> PeriodError {
    PeriodError::InvalidSplit {
        reason: reason.into(),
    }
}
