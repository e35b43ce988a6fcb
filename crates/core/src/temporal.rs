//! The temporal container: adapter, configuration and navigable cells.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::adapter::{AdapterOptions, DEFAULT_INTERVAL_LIMIT, DateAdapter, WeekStart};
use crate::error::PeriodError;
use crate::factory::to_period;
use crate::instant::Instant;
use crate::navigate::go;
use crate::observable::Observable;
use crate::period::Period;
use crate::registry::UnitRegistry;
use crate::unit::Unit;

/// Construction options for a [`Temporal`].
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```ignore
/// let options = TemporalOptions::new(date)
///     .with_adapter(Arc::new(NativeAdapter))
///     .with_week_starts_on(0);
/// let temporal = Temporal::new(options)?;
/// ```
#[derive(Clone)]
pub struct TemporalOptions {
    date: Instant,
    adapter: Option<Arc<dyn DateAdapter>>,
    now: Option<Instant>,
    week_starts_on: Option<u8>,
    registry: Option<Arc<UnitRegistry>>,
    interval_limit: Option<usize>,
}

impl TemporalOptions {
    /// Creates options browsing around `date`.
    ///
    /// Defaults: no adapter (construction fails until one is set), `now`
    /// from the system clock, weeks starting on Monday, built-in units only,
    /// and an interval limit of [`DEFAULT_INTERVAL_LIMIT`].
    pub fn new(date: Instant) -> Self {
        Self {
            date,
            adapter: None,
            now: None,
            week_starts_on: None,
            registry: None,
            interval_limit: None,
        }
    }

    /// Sets the calendar backend.
    pub fn with_adapter(mut self, adapter: Arc<dyn DateAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Pins the `now` cell instead of reading the system clock.
    pub fn with_now(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    /// Sets the first day of the week (`0 = Sunday`).
    pub fn with_week_starts_on(mut self, day: u8) -> Self {
        self.week_starts_on = Some(day);
        self
    }

    /// Shares an existing registry, e.g. one with extension units.
    pub fn with_registry(mut self, registry: Arc<UnitRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Caps interval enumeration and division results.
    pub fn with_interval_limit(mut self, limit: usize) -> Self {
        self.interval_limit = Some(limit);
        self
    }

    /// Returns the date the `browsing` cell starts around.
    pub fn date(&self) -> Instant {
        self.date
    }

    /// Validates these options.
    ///
    /// Returns an error if no adapter is set, the week start is outside
    /// 0..=6, or the interval limit is zero.
    pub fn validate(&self) -> Result<(), PeriodError> {
        if self.adapter.is_none() {
            return Err(PeriodError::MissingAdapter);
        }
        self.adapter_options().map(|_| ())
    }

    fn adapter_options(&self) -> Result<AdapterOptions, PeriodError> {
        let week_starts_on = match self.week_starts_on {
            Some(day) => WeekStart::new(day)?,
            None => WeekStart::default(),
        };
        let interval_limit = self.interval_limit.unwrap_or(DEFAULT_INTERVAL_LIMIT);
        if interval_limit == 0 {
            return Err(PeriodError::InvalidIntervalLimit {
                value: interval_limit,
            });
        }
        Ok(AdapterOptions {
            week_starts_on,
            interval_limit,
        })
    }
}

impl fmt::Debug for TemporalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalOptions")
            .field("date", &self.date)
            .field("adapter", &self.adapter.is_some())
            .field("now", &self.now)
            .field("week_starts_on", &self.week_starts_on)
            .field("interval_limit", &self.interval_limit)
            .finish()
    }
}

/// Shared state for one application: the active adapter, the unit
/// registry, week convention, and the `browsing`/`now` cells.
///
/// All algebra functions are free functions taking `&Temporal`; the
/// container itself only stores configuration and the two cells.
pub struct Temporal {
    adapter: Arc<dyn DateAdapter>,
    registry: Arc<UnitRegistry>,
    options: AdapterOptions,
    browsing: Observable<Period>,
    now: Observable<Period>,
}

impl Temporal {
    /// Builds a container from `options`.
    ///
    /// `browsing` starts as the month around `options.date()`, `now` as the
    /// day around the configured (or system) current instant.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::MissingAdapter`] without an adapter, and the
    /// validation errors of [`TemporalOptions::validate`].
    pub fn new(options: TemporalOptions) -> Result<Self, PeriodError> {
        options.validate()?;
        let adapter_options = options.adapter_options()?;
        let adapter = options.adapter.ok_or(PeriodError::MissingAdapter)?;
        let registry = options
            .registry
            .unwrap_or_else(|| Arc::new(UnitRegistry::new()));
        let now = options.now.unwrap_or_else(Instant::now);

        let browsing_definition = registry.require(&Unit::Month)?;
        let now_definition = registry.require(&Unit::Day)?;
        let (start, end) =
            browsing_definition.build(options.date, adapter.as_ref(), adapter_options);
        let browsing = Period::from_parts(start, end, Unit::Month, options.date);
        let (start, end) = now_definition.build(now, adapter.as_ref(), adapter_options);
        let now = Period::from_parts(start, end, Unit::Day, now);

        debug!(
            week_starts_on = adapter_options.week_starts_on.get(),
            interval_limit = adapter_options.interval_limit,
            "temporal container created"
        );

        Ok(Self {
            adapter,
            registry,
            options: adapter_options,
            browsing: Observable::new(browsing),
            now: Observable::new(now),
        })
    }

    /// Returns the calendar backend.
    pub fn adapter(&self) -> &dyn DateAdapter {
        self.adapter.as_ref()
    }

    /// Returns the unit registry.
    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Returns a handle to the shared registry.
    pub fn shared_registry(&self) -> Arc<UnitRegistry> {
        Arc::clone(&self.registry)
    }

    /// Returns the first day of the week.
    pub fn week_starts_on(&self) -> WeekStart {
        self.options.week_starts_on
    }

    /// Returns the cap on enumerated intervals.
    pub fn interval_limit(&self) -> usize {
        self.options.interval_limit
    }

    /// Options forwarded to every adapter call.
    pub fn adapter_options(&self) -> AdapterOptions {
        self.options
    }

    /// The period the user is looking at.
    pub fn browsing(&self) -> &Observable<Period> {
        &self.browsing
    }

    /// The period containing the current instant.
    pub fn now(&self) -> &Observable<Period> {
        &self.now
    }

    /// Moves `browsing` by `steps` of its own unit.
    pub fn go_browsing(&self, steps: i64) -> Result<Arc<Period>, PeriodError> {
        let current = self.browsing.get();
        let moved = go(self, &current, steps)?;
        self.browsing.set(moved);
        Ok(self.browsing.get())
    }

    /// Replaces `now` with the period of the same unit around `instant`.
    pub fn refresh_now(&self, instant: Instant) -> Result<Arc<Period>, PeriodError> {
        let unit = self.now.get().unit().clone();
        let unit = if unit == Unit::Custom { Unit::Day } else { unit };
        self.now.set(to_period(self, instant, &unit)?);
        Ok(self.now.get())
    }
}

impl fmt::Debug for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Temporal")
            .field("options", &self.options)
            .field("browsing", &self.browsing)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}
