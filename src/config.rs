//! TOML configuration for building a [`Temporal`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tempora_core::{
    DEFAULT_INTERVAL_LIMIT, Instant, PeriodError, Temporal, TemporalOptions, UnitRegistry,
};
use tempora_native::NativeAdapter;
use thiserror::Error;
use tracing::info;

use crate::convert::{build_unit_definition, parse_anchor};

/// Errors raised while loading or applying a [`TemporaConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The TOML could not be parsed into a [`TemporaConfig`].
    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the calendar cannot use.
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// The resulting options or unit definitions were rejected.
    #[error(transparent)]
    Period(#[from] PeriodError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemporaConfig {
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Extra fixed-length units registered next to the calendar units.
    #[serde(default)]
    pub units: Vec<UnitToml>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// First day of the week, `0` = Sunday through `6` = Saturday.
    #[serde(default = "default_week_starts_on")]
    pub week_starts_on: u8,
    #[serde(default = "default_interval_limit")]
    pub interval_limit: usize,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            week_starts_on: default_week_starts_on(),
            interval_limit: default_interval_limit(),
        }
    }
}

fn default_week_starts_on() -> u8 {
    1
}
fn default_interval_limit() -> usize {
    DEFAULT_INTERVAL_LIMIT
}

/// A unit of `days` consecutive days, repeating from `anchor`.
///
/// ```toml
/// [[units]]
/// name = "sprint"
/// days = 14
/// anchor = "2024-01-01"
/// divisible_into = ["day", "week"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UnitToml {
    pub name: String,
    pub days: u32,
    /// Any date on which a block starts, as `YYYY-MM-DD`.
    #[serde(default = "default_anchor")]
    pub anchor: String,
    #[serde(default)]
    pub divisible_into: Vec<String>,
    #[serde(default)]
    pub merges_into: Option<String>,
}

fn default_anchor() -> String {
    "1970-01-01".to_string()
}

impl TemporaConfig {
    /// Reads and parses a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&toml_str)?;
        info!(path = %path.display(), units = config.units.len(), "config loaded");
        Ok(config)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Builds the unit registry: the calendar units plus every `[[units]]`
    /// entry, in file order.
    pub fn registry(&self) -> Result<UnitRegistry, ConfigError> {
        let mut registry = UnitRegistry::new();
        for (i, unit) in self.units.iter().enumerate() {
            if unit.days == 0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("units[{i}].days"),
                    value: unit.days.to_string(),
                });
            }
            let anchor = parse_anchor(&unit.anchor).ok_or_else(|| ConfigError::InvalidValue {
                field: format!("units[{i}].anchor"),
                value: unit.anchor.clone(),
            })?;
            let definition = build_unit_definition(unit, anchor);
            registry.define_unit(&unit.name, definition)?;
        }
        Ok(registry)
    }

    /// Turns the config into [`TemporalOptions`] on the chrono backend,
    /// browsing around `date`.
    pub fn into_options(self, date: Instant) -> Result<TemporalOptions, ConfigError> {
        let registry = self.registry()?;
        let options = TemporalOptions::new(date)
            .with_adapter(Arc::new(NativeAdapter))
            .with_week_starts_on(self.calendar.week_starts_on)
            .with_interval_limit(self.calendar.interval_limit)
            .with_registry(Arc::new(registry));
        options.validate()?;
        Ok(options)
    }

    /// Shorthand for [`into_options`](Self::into_options) followed by
    /// [`Temporal::new`].
    pub fn build_temporal(self, date: Instant) -> Result<Temporal, ConfigError> {
        Ok(Temporal::new(self.into_options(date)?)?)
    }
}
