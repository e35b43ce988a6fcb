//! Error types for the tempora-core crate.

/// Error type for all fallible operations in the tempora-core crate.
///
/// Every variant is local to the call that produced it. Operations are
/// deterministic, so retrying a failed call with the same inputs fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Returned when a [`Temporal`](crate::Temporal) is built without an adapter.
    #[error("a date adapter is required to build a temporal container")]
    MissingAdapter,

    /// Returned when a unit is referenced that the registry does not know.
    #[error("unknown unit: {unit}")]
    UnknownUnit {
        /// Name of the unregistered unit.
        unit: String,
    },

    /// Returned when a period cannot be divided into the requested unit.
    #[error("cannot divide a {unit} period into {target} periods")]
    DivisionNotSupported {
        /// Unit of the period being divided.
        unit: String,
        /// Requested child unit.
        target: String,
    },

    /// Returned when zooming out of a unit that merges into nothing.
    #[error("{unit} has no parent unit")]
    NoParentUnit {
        /// Unit without a `merges_into` parent.
        unit: String,
    },

    /// Returned when a unit name is registered twice.
    #[error("unit already defined: {unit}")]
    DuplicateUnit {
        /// The colliding unit name.
        unit: String,
    },

    /// Returned when split options cannot partition the period.
    #[error("invalid split: {reason}")]
    InvalidSplit {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the week start is outside 0..=6.
    #[error("invalid week start: {value} (must be 0..=6, 0 = Sunday)")]
    InvalidWeekStart {
        /// The invalid value.
        value: u8,
    },

    /// Returned when the interval limit is zero.
    #[error("invalid interval limit: {value} (must be >= 1)")]
    InvalidIntervalLimit {
        /// The invalid value.
        value: usize,
    },
}
