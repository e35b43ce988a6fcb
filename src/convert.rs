//! Conversions from TOML values to tempora types.

use chrono::NaiveDate;
use tempora_core::{Instant, MILLIS_PER_DAY, Unit, UnitDefinition};
use tempora_native::from_naive;

use crate::config::UnitToml;

/// Parses a `YYYY-MM-DD` date into the instant at its midnight.
pub fn parse_anchor(s: &str) -> Option<Instant> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(from_naive)
}

/// Builds the definition of a fixed-length unit: blocks of `unit.days`
/// days, one of which starts at `anchor`.
pub fn build_unit_definition(unit: &UnitToml, anchor: Instant) -> UnitDefinition {
    let block = i64::from(unit.days) * MILLIS_PER_DAY;
    let origin = anchor.as_millis();
    let mut definition = UnitDefinition::new(move |instant: Instant, _, _| {
        let offset = instant.as_millis().saturating_sub(origin).rem_euclid(block);
        let start = instant.add_millis(-offset);
        (start, start.add_millis(block - 1))
    })
    .with_divisible_into(unit.divisible_into.iter().map(|name| Unit::from(name.as_str())));
    if let Some(parent) = &unit.merges_into {
        definition = definition.with_merges_into(Unit::from(parent.as_str()));
    }
    definition
}
