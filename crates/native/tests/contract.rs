use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempora_core::{AdapterOptions, DateAdapter, Instant, Span, Unit, WeekStart};
use tempora_native::{NativeAdapter, ymd};

/// Random instants between 1900 and 2100.
fn sample_instants(seed: u64, n: usize) -> Vec<Instant> {
    let lo = ymd(1900, 1, 1).unwrap().as_millis();
    let hi = ymd(2100, 1, 1).unwrap().as_millis();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Instant::from_millis(rng.random_range(lo..hi)))
        .collect()
}

fn all_week_starts() -> Vec<AdapterOptions> {
    (0..=6)
        .map(|day| AdapterOptions {
            week_starts_on: WeekStart::new(day).unwrap(),
            ..AdapterOptions::default()
        })
        .collect()
}

#[test]
fn start_and_end_bracket_the_input() {
    let adapter = NativeAdapter;
    for options in all_week_starts() {
        for date in sample_instants(7, 200) {
            for unit in Unit::BUILTIN {
                let start = adapter.start_of(date, &unit, options);
                let end = adapter.end_of(date, &unit, options);
                assert!(
                    start <= date && date <= end,
                    "{unit} does not bracket {date}: [{start}, {end}]"
                );
            }
        }
    }
}

#[test]
fn start_and_end_are_idempotent() {
    let adapter = NativeAdapter;
    let options = AdapterOptions::default();
    for date in sample_instants(11, 200) {
        for unit in Unit::BUILTIN {
            let start = adapter.start_of(date, &unit, options);
            let end = adapter.end_of(date, &unit, options);
            assert_eq!(adapter.start_of(start, &unit, options), start, "{unit}");
            assert_eq!(adapter.end_of(end, &unit, options), end, "{unit}");
            assert_eq!(adapter.start_of(end, &unit, options), start, "{unit}");
        }
    }
}

#[test]
fn unit_end_is_one_millisecond_before_next_start() {
    let adapter = NativeAdapter;
    let options = AdapterOptions::default();
    for date in sample_instants(13, 200) {
        for unit in Unit::BUILTIN {
            let end = adapter.end_of(date, &unit, options);
            let next_start = end.add_millis(1);
            assert_eq!(
                adapter.start_of(next_start, &unit, options),
                next_start,
                "{unit} after {date}"
            );
        }
    }
}

#[test]
fn add_then_subtract_on_unit_starts() {
    let adapter = NativeAdapter;
    let options = AdapterOptions::default();
    for date in sample_instants(17, 100) {
        for unit in Unit::BUILTIN {
            let start = adapter.start_of(date, &unit, options);
            for amount in [-25, -1, 1, 3, 40] {
                let span = Span::new(amount, unit.clone());
                let moved = adapter.add(start, &span);
                assert_eq!(adapter.subtract(moved, &span), start, "{amount} {unit}");
            }
        }
    }
}

#[test]
fn week_has_seven_days_for_every_start() {
    let adapter = NativeAdapter;
    for options in all_week_starts() {
        for date in sample_instants(19, 50) {
            let start = adapter.start_of(date, &Unit::Week, options);
            let end = adapter.end_of(date, &Unit::Week, options);
            let days = adapter.each_interval(start, end, &Unit::Day, options);
            assert_eq!(days.len(), 7);
            assert_eq!(start.weekday(), options.week_starts_on.get());
        }
    }
}

#[test]
fn month_lengths_2024() {
    let adapter = NativeAdapter;
    let options = AdapterOptions::default();
    let expected = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (index, length) in expected.iter().enumerate() {
        let first = ymd(2024, index as u32 + 1, 1).unwrap();
        let end = adapter.end_of(first, &Unit::Month, options);
        let days = adapter.each_interval(first, end, &Unit::Day, options);
        assert_eq!(days.len(), *length, "month {}", index + 1);
    }
}

#[test]
fn each_interval_is_ascending_and_capped() {
    let adapter = NativeAdapter;
    let options = AdapterOptions {
        interval_limit: 1000,
        ..AdapterOptions::default()
    };
    let start = ymd(2000, 1, 1).unwrap();
    let end = ymd(2010, 1, 1).unwrap();
    let days = adapter.each_interval(start, end, &Unit::Day, options);
    assert_eq!(days.len(), 1000);
    assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
}
