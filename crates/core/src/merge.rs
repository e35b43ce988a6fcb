//! Combining runs of periods.

use tracing::debug;

use crate::factory::{create_custom_period, to_period};
use crate::period::Period;
use crate::temporal::Temporal;
use crate::unit::Unit;

/// Merges `periods` into a single period.
///
/// Returns `None` for an empty slice and the period itself for a single
/// element. Otherwise the periods are sorted by start (stably) and, when
/// they share one registered unit and form a gap-free run that is exactly
/// one parent unit (for example seven week-aligned days), the parent period
/// is returned. Any other input merges into a custom period spanning the
/// earliest start to the latest end; gaps are covered, not rejected.
#[tracing::instrument(skip_all, fields(count = periods.len()))]
pub fn merge(temporal: &Temporal, periods: &[Period]) -> Option<Period> {
    match periods {
        [] => return None,
        [only] => return Some(only.clone()),
        _ => {}
    }

    let mut sorted: Vec<&Period> = periods.iter().collect();
    sorted.sort_by_key(|period| period.start());

    if let Some(parent) = natural_parent(temporal, &sorted) {
        debug!(unit = %parent.unit(), "merged into natural unit");
        return Some(parent);
    }

    let start = sorted[0].start();
    let end = sorted.iter().map(|period| period.end()).max()?;
    Some(create_custom_period(start, end))
}

/// Finds the parent unit whose period exactly covers a contiguous run.
fn natural_parent(temporal: &Temporal, sorted: &[&Period]) -> Option<Period> {
    let (first, last) = (sorted.first()?, sorted.last()?);
    let unit = first.unit();
    if *unit == Unit::Custom || sorted.iter().any(|period| period.unit() != unit) {
        return None;
    }
    let contiguous = sorted
        .windows(2)
        .all(|pair| pair[0].end().add_millis(1) == pair[1].start());
    if !contiguous {
        return None;
    }

    temporal
        .registry()
        .parents_of(unit)
        .into_iter()
        .filter_map(|parent| to_period(temporal, first.start(), &parent).ok())
        .find(|candidate| candidate.start() == first.start() && candidate.end() == last.end())
}
