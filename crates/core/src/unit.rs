//! Unit tags and the duration type built on them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Granularity tag carried by every [`Period`](crate::Period).
///
/// The eight calendar units are closed variants. [`Unit::Custom`] tags
/// ad-hoc ranges built from explicit bounds, and [`Unit::Named`] is the
/// open extension point for units added through
/// [`UnitRegistry::define_unit`](crate::UnitRegistry::define_unit).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Custom,
    /// A registered extension unit, keyed by name.
    Named(Arc<str>),
}

impl Unit {
    /// The calendar units, from coarsest to finest.
    pub const BUILTIN: [Unit; 8] = [
        Unit::Year,
        Unit::Quarter,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Creates a unit from its name.
    ///
    /// Built-in names (and `"custom"`) map to their closed variants; any
    /// other name becomes [`Unit::Named`].
    pub fn named(name: &str) -> Self {
        match name {
            "year" => Unit::Year,
            "quarter" => Unit::Quarter,
            "month" => Unit::Month,
            "week" => Unit::Week,
            "day" => Unit::Day,
            "hour" => Unit::Hour,
            "minute" => Unit::Minute,
            "second" => Unit::Second,
            "custom" => Unit::Custom,
            other => Unit::Named(Arc::from(other)),
        }
    }

    /// Returns the registry key for this unit.
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Year => "year",
            Unit::Quarter => "quarter",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Custom => "custom",
            Unit::Named(name) => name,
        }
    }

    /// Returns `true` for the eight calendar units a date adapter understands.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Unit::Custom | Unit::Named(_))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Unit {
    fn from(name: &str) -> Self {
        Unit::named(name)
    }
}

impl FromStr for Unit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Unit::named(s))
    }
}

/// A signed amount of a unit, e.g. `+1 month` or `-2 weeks`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    /// Number of units; negative amounts move backward.
    pub amount: i64,
    /// Unit being counted.
    pub unit: Unit,
}

impl Span {
    /// Creates a span of `amount` units.
    pub fn new(amount: i64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    /// A single step of `unit`.
    pub fn one(unit: Unit) -> Self {
        Self::new(1, unit)
    }

    /// Returns the same span pointing the other way.
    pub fn negated(&self) -> Self {
        Self::new(self.amount.saturating_neg(), self.unit.clone())
    }
}
