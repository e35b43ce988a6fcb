//! Fixed-width adapter for unit tests.

use std::sync::Arc;

use crate::adapter::{AdapterOptions, DateAdapter};
use crate::instant::Instant;
use crate::temporal::{Temporal, TemporalOptions};
use crate::unit::{Span, Unit};

/// Every built-in unit is the same 1000 ms window.
pub(crate) struct Ticks;

impl DateAdapter for Ticks {
    fn start_of(&self, date: Instant, unit: &Unit, _options: AdapterOptions) -> Instant {
        if !unit.is_builtin() {
            return date;
        }
        Instant::from_millis(date.as_millis().div_euclid(1000) * 1000)
    }

    fn end_of(&self, date: Instant, unit: &Unit, options: AdapterOptions) -> Instant {
        if !unit.is_builtin() {
            return date;
        }
        self.start_of(date, unit, options).add_millis(999)
    }

    fn add(&self, date: Instant, span: &Span) -> Instant {
        if !span.unit.is_builtin() {
            return date;
        }
        date.add_millis(span.amount * 1000)
    }
}

pub(crate) fn ms(value: i64) -> Instant {
    Instant::from_millis(value)
}

pub(crate) fn tick_options() -> TemporalOptions {
    TemporalOptions::new(ms(2_500))
        .with_adapter(Arc::new(Ticks))
        .with_now(ms(7_100))
}

pub(crate) fn tick_temporal() -> Temporal {
    match Temporal::new(tick_options()) {
        Ok(temporal) => temporal,
        Err(err) => panic!("tick temporal should build: {err}"),
    }
}
