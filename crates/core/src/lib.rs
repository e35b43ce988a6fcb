//! # tempora-core
//!
//! Period algebra over a pluggable date adapter.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateAdapter"] --> B["UnitRegistry"]
//!     B --> C["to_period / create_period"]
//!     C --> D["divide / split / merge"]
//!     C --> E["next / previous / go"]
//!     C --> F["is_same / contains"]
//!     D --> G["Temporal"]
//!     E --> G
//!     F --> G
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use tempora_core::{Temporal, TemporalOptions, Unit, divide, merge, next, to_period};
//!
//! let temporal = Temporal::new(TemporalOptions::new(date).with_adapter(Arc::new(adapter)))?;
//!
//! let month = to_period(&temporal, date, &Unit::Month)?;
//! let days = divide(&temporal, &month, &Unit::Day)?;
//! assert_eq!(merge(&temporal, &days).unwrap().unit(), &Unit::Month);
//!
//! let following = next(&temporal, &month)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `adapter` | Date adapter trait and its options |
//! | `unit` | Unit tags and spans |
//! | `registry` | Unit definitions and the registry |
//! | `period` | The immutable period value |
//! | `factory` | Period construction |
//! | `divide` | Division and splitting |
//! | `merge` | Merging with natural unit detection |
//! | `navigate` | Next, previous and go |
//! | `zoom` | Moving between granularities |
//! | `predicates` | Same-unit, containment and weekday checks |
//! | `observable` | Value cells with change listeners |
//! | `temporal` | The container tying it together |
//! | `error` | Error types |

mod adapter;
mod divide;
mod error;
mod factory;
mod instant;
mod merge;
mod navigate;
mod observable;
mod period;
mod predicates;
mod registry;
mod temporal;
mod unit;
mod zoom;

#[cfg(test)]
mod testing;

pub use adapter::{AdapterOptions, DEFAULT_INTERVAL_LIMIT, DateAdapter, WeekStart};
pub use divide::{SplitOptions, divide, split};
pub use error::PeriodError;
pub use factory::{create_custom_period, create_period, to_period, to_period_default};
pub use instant::{Instant, MILLIS_PER_DAY};
pub use merge::merge;
pub use navigate::{go, next, previous};
pub use observable::{Observable, SubscriptionId};
pub use period::Period;
pub use predicates::{Bounded, contains, is_same, is_today, is_weekday, is_weekend};
pub use registry::{BuildFn, UnitDefinition, UnitRegistry};
pub use temporal::{Temporal, TemporalOptions};
pub use unit::{Span, Unit};
pub use zoom::{zoom_in, zoom_out, zoom_to};
