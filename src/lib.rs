//! # tempora
//!
//! Unit-tagged time periods: build the month around a date, cut it into
//! days, merge the days back, step to the next month.
//!
//! This crate bundles [`tempora_core`] (the period algebra) with
//! [`tempora_native`] (a chrono-backed Gregorian calendar) and adds TOML
//! configuration and logging setup.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tempora::{TemporaConfig, Unit, divide, next, to_period, ymd};
//!
//! let date = ymd(2024, 2, 15).unwrap();
//! let temporal = TemporaConfig::from_path("tempora.toml")?.build_temporal(date)?;
//!
//! let february = to_period(&temporal, date, &Unit::Month)?;
//! assert_eq!(divide(&temporal, &february, &Unit::Day)?.len(), 29);
//! let march = next(&temporal, &february)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | TOML configuration and extra fixed-length units |
//! | `logging` | `tracing-subscriber` setup |

pub mod config;
mod convert;
pub mod logging;

pub use config::{CalendarToml, ConfigError, TemporaConfig, UnitToml};
pub use tempora_core::*;
pub use tempora_native::{NativeAdapter, from_naive, to_naive, ymd, ymd_hms};
