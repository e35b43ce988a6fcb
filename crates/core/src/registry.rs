//! Unit registry: how each unit builds, divides and merges.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::adapter::{AdapterOptions, DateAdapter};
use crate::error::PeriodError;
use crate::instant::Instant;
use crate::unit::Unit;

/// Computes the inclusive `(start, end)` bounds of the unit containing an instant.
pub type BuildFn = dyn Fn(Instant, &dyn DateAdapter, AdapterOptions) -> (Instant, Instant) + Send + Sync;

/// Rules for one unit: construction, legal divisions and natural parent.
#[derive(Clone)]
pub struct UnitDefinition {
    build: Arc<BuildFn>,
    divisible_into: BTreeSet<Unit>,
    merges_into: Option<Unit>,
}

impl UnitDefinition {
    /// Creates a definition from a bounds function, with no children and
    /// no parent.
    pub fn new<F>(build: F) -> Self
    where
        F: Fn(Instant, &dyn DateAdapter, AdapterOptions) -> (Instant, Instant)
            + Send
            + Sync
            + 'static,
    {
        Self {
            build: Arc::new(build),
            divisible_into: BTreeSet::new(),
            merges_into: None,
        }
    }

    /// A definition whose bounds come straight from the adapter's
    /// `start_of`/`end_of` for `unit`.
    pub fn calendar(unit: Unit) -> Self {
        Self::new(move |instant, adapter, options| {
            (
                adapter.start_of(instant, &unit, options),
                adapter.end_of(instant, &unit, options),
            )
        })
    }

    /// Sets the units this unit may be divided into.
    pub fn with_divisible_into<I>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = Unit>,
    {
        self.divisible_into = units.into_iter().collect();
        self
    }

    /// Sets the unit a complete run of this unit merges into.
    pub fn with_merges_into(mut self, unit: Unit) -> Self {
        self.merges_into = Some(unit);
        self
    }

    /// Returns the inclusive bounds of the unit containing `instant`.
    pub fn build(
        &self,
        instant: Instant,
        adapter: &dyn DateAdapter,
        options: AdapterOptions,
    ) -> (Instant, Instant) {
        (self.build)(instant, adapter, options)
    }

    /// Returns the units this unit may be divided into.
    pub fn divisible_into(&self) -> &BTreeSet<Unit> {
        &self.divisible_into
    }

    /// Returns `true` if `unit` is a legal division target.
    pub fn can_divide_into(&self, unit: &Unit) -> bool {
        self.divisible_into.contains(unit)
    }

    /// Returns the natural parent unit, if any.
    pub fn merges_into(&self) -> Option<&Unit> {
        self.merges_into.as_ref()
    }
}

impl fmt::Debug for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitDefinition")
            .field("divisible_into", &self.divisible_into)
            .field("merges_into", &self.merges_into)
            .finish_non_exhaustive()
    }
}

/// Mapping from unit tag to [`UnitDefinition`].
///
/// Registration takes `&mut self`; once a registry is shared (typically
/// behind an `Arc` inside a [`Temporal`](crate::Temporal)) it is frozen.
/// Entries can never be replaced.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: BTreeMap<Unit, UnitDefinition>,
}

impl UnitRegistry {
    /// Creates a registry holding the eight calendar units.
    pub fn new() -> Self {
        let mut units = BTreeMap::new();
        for (unit, children, parent) in builtin_table() {
            let mut definition =
                UnitDefinition::calendar(unit.clone()).with_divisible_into(children);
            if let Some(parent) = parent {
                definition = definition.with_merges_into(parent);
            }
            units.insert(unit, definition);
        }
        Self { units }
    }

    /// Creates a registry with no units at all.
    pub fn empty() -> Self {
        Self {
            units: BTreeMap::new(),
        }
    }

    /// Registers `definition` under `name` and returns the unit tag.
    ///
    /// # Errors
    ///
    /// - [`PeriodError::DuplicateUnit`] if `name` is already registered or
    ///   is the reserved `"custom"` tag.
    /// - [`PeriodError::UnknownUnit`] if the definition divides into or
    ///   merges into a unit that is not registered.
    pub fn define_unit(
        &mut self,
        name: &str,
        definition: UnitDefinition,
    ) -> Result<Unit, PeriodError> {
        let unit = Unit::named(name);
        if unit == Unit::Custom || self.units.contains_key(&unit) {
            return Err(PeriodError::DuplicateUnit {
                unit: name.to_string(),
            });
        }
        let referenced = definition
            .divisible_into
            .iter()
            .chain(definition.merges_into.iter());
        for other in referenced {
            if *other != unit && !self.units.contains_key(other) {
                return Err(PeriodError::UnknownUnit {
                    unit: other.to_string(),
                });
            }
        }
        debug!(unit = %unit, "unit registered");
        self.units.insert(unit.clone(), definition);
        Ok(unit)
    }

    /// Returns the definition registered for `unit`.
    pub fn get_unit_definition(&self, unit: &Unit) -> Option<&UnitDefinition> {
        self.units.get(unit)
    }

    /// Returns `true` if `unit` is registered.
    pub fn has_unit(&self, unit: &Unit) -> bool {
        self.units.contains_key(unit)
    }

    /// Looks up a definition, failing with [`PeriodError::UnknownUnit`].
    pub fn require(&self, unit: &Unit) -> Result<&UnitDefinition, PeriodError> {
        self.get_unit_definition(unit)
            .ok_or_else(|| PeriodError::UnknownUnit {
                unit: unit.to_string(),
            })
    }

    /// Iterates over the registered units in tag order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.keys()
    }

    /// Units a complete run of `child` may merge into.
    ///
    /// The declared `merges_into` parent comes first, followed by every
    /// other unit that lists `child` as a division target, finest first.
    pub fn parents_of(&self, child: &Unit) -> Vec<Unit> {
        let mut parents = Vec::new();
        if let Some(parent) = self.get_unit_definition(child).and_then(|d| d.merges_into()) {
            parents.push(parent.clone());
        }
        for (unit, definition) in self.units.iter().rev() {
            if definition.can_divide_into(child) && !parents.contains(unit) {
                parents.push(unit.clone());
            }
        }
        parents
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `(unit, divisible_into, merges_into)` for the calendar units.
///
/// Only children that tile their parent exactly are listed, so dividing
/// never produces periods that spill past the parent's bounds.
fn builtin_table() -> Vec<(Unit, Vec<Unit>, Option<Unit>)> {
    vec![
        (Unit::Year, vec![Unit::Quarter, Unit::Month, Unit::Day], None),
        (Unit::Quarter, vec![Unit::Month, Unit::Day], Some(Unit::Year)),
        (Unit::Month, vec![Unit::Day], Some(Unit::Quarter)),
        (Unit::Week, vec![Unit::Day], Some(Unit::Month)),
        (Unit::Day, vec![Unit::Hour], Some(Unit::Week)),
        (Unit::Hour, vec![Unit::Minute], Some(Unit::Day)),
        (Unit::Minute, vec![Unit::Second], Some(Unit::Hour)),
        (Unit::Second, vec![], Some(Unit::Minute)),
    ]
}
