use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempora_core::{
    Instant, Period, SplitOptions, Span, Temporal, TemporalOptions, Unit, create_custom_period,
    divide, merge, split, to_period,
};
use tempora_native::{NativeAdapter, ymd, ymd_hms};

fn temporal_with_week_start(day: u8) -> Temporal {
    let date = ymd(2024, 1, 1).unwrap();
    let options = TemporalOptions::new(date)
        .with_adapter(Arc::new(NativeAdapter))
        .with_now(date)
        .with_week_starts_on(day);
    Temporal::new(options).unwrap()
}

fn sample_instants(seed: u64, n: usize) -> Vec<Instant> {
    let lo = ymd(1950, 1, 1).unwrap().as_millis();
    let hi = ymd(2050, 1, 1).unwrap().as_millis();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Instant::from_millis(rng.random_range(lo..hi)))
        .collect()
}

fn assert_partition(period: &Period, parts: &[Period], label: &str) {
    assert!(!parts.is_empty(), "{label}: no parts");
    assert_eq!(parts[0].start(), period.start(), "{label}: first start");
    assert_eq!(
        parts[parts.len() - 1].end(),
        period.end(),
        "{label}: last end"
    );
    for pair in parts.windows(2) {
        assert_eq!(
            pair[0].end().add_millis(1),
            pair[1].start(),
            "{label}: gap or overlap"
        );
    }
}

#[test]
fn divide_partitions_every_builtin_period() {
    for week_start in [0, 1, 6] {
        let temporal = temporal_with_week_start(week_start);
        for date in sample_instants(u64::from(week_start) + 1, 40) {
            for unit in Unit::BUILTIN {
                let period = to_period(&temporal, date, &unit).unwrap();
                let children = temporal
                    .registry()
                    .get_unit_definition(&unit)
                    .unwrap()
                    .divisible_into()
                    .clone();
                for child in children {
                    let parts = divide(&temporal, &period, &child).unwrap();
                    assert_partition(&period, &parts, &format!("{unit} -> {child}"));
                    assert!(parts.iter().all(|p| *p.unit() == child));
                }
            }
        }
    }
}

#[test]
fn merge_of_division_round_trips() {
    let temporal = temporal_with_week_start(1);
    for date in sample_instants(99, 40) {
        for unit in Unit::BUILTIN {
            let period = to_period(&temporal, date, &unit).unwrap();
            let children = temporal
                .registry()
                .get_unit_definition(&unit)
                .unwrap()
                .divisible_into()
                .clone();
            for child in children {
                let parts = divide(&temporal, &period, &child).unwrap();
                let merged = merge(&temporal, &parts).unwrap();
                assert_eq!(merged.unit(), period.unit(), "{unit} -> {child}");
                assert_eq!(merged.start(), period.start(), "{unit} -> {child}");
                assert_eq!(merged.end(), period.end(), "{unit} -> {child}");
            }
        }
    }
}

#[test]
fn day_aligned_custom_range_divides_into_days() {
    let temporal = temporal_with_week_start(1);
    let start = ymd(2024, 2, 27).unwrap();
    let end = ymd(2024, 3, 3).unwrap().add_millis(-1);
    let range = create_custom_period(start, end);
    let days = divide(&temporal, &range, &Unit::Day).unwrap();
    assert_eq!(days.len(), 5);
    assert_partition(&range, &days, "custom -> day");
}

#[test]
fn unaligned_custom_range_is_cut_at_its_bounds() {
    let temporal = temporal_with_week_start(1);
    let start = ymd_hms(2024, 6, 10, 12, 0, 0).unwrap();
    let end = ymd_hms(2024, 6, 12, 12, 0, 0).unwrap();
    let range = create_custom_period(start, end);

    let parts = split(&temporal, &range, &SplitOptions::By(Unit::Day)).unwrap();
    assert_eq!(parts.len(), 3);
    assert_partition(&range, &parts, "custom -> day");
    assert_eq!(*parts[0].unit(), Unit::Custom);
    assert_eq!(*parts[1].unit(), Unit::Day);
    assert_eq!(parts[1].start(), ymd(2024, 6, 11).unwrap());
    assert_eq!(*parts[2].unit(), Unit::Custom);
    assert_eq!(parts[2].start(), ymd(2024, 6, 12).unwrap());
}

#[test]
fn split_by_count_partitions() {
    let temporal = temporal_with_week_start(1);
    for date in sample_instants(5, 20) {
        let month = to_period(&temporal, date, &Unit::Month).unwrap();
        for count in [1, 2, 3, 7, 10] {
            let parts = split(&temporal, &month, &SplitOptions::Count(count)).unwrap();
            assert_eq!(parts.len(), count);
            assert_partition(&month, &parts, &format!("count {count}"));
        }
    }
}

#[test]
fn split_by_duration_partitions_and_clips() {
    let temporal = temporal_with_week_start(1);
    let month = to_period(&temporal, ymd(2024, 2, 10).unwrap(), &Unit::Month).unwrap();
    let span = Span::new(10, Unit::Day);
    let parts = split(&temporal, &month, &SplitOptions::Duration(span)).unwrap();
    assert_eq!(parts.len(), 3);
    assert_partition(&month, &parts, "10 days");
    assert_eq!(parts[2].start(), ymd(2024, 2, 21).unwrap());
    assert!(parts.iter().all(|p| *p.unit() == Unit::Custom));
}

#[test]
fn split_by_unit_matches_divide() {
    let temporal = temporal_with_week_start(1);
    let quarter = to_period(&temporal, ymd(2024, 5, 5).unwrap(), &Unit::Quarter).unwrap();
    let by = split(&temporal, &quarter, &SplitOptions::By(Unit::Month)).unwrap();
    assert_eq!(by.len(), 3);
    assert_eq!(by, divide(&temporal, &quarter, &Unit::Month).unwrap());
}

#[test]
fn division_is_capped_at_interval_limit() {
    let date = ymd(2024, 1, 1).unwrap();
    let options = TemporalOptions::new(date)
        .with_adapter(Arc::new(NativeAdapter))
        .with_now(date)
        .with_interval_limit(100);
    let temporal = Temporal::new(options).unwrap();
    let year = to_period(&temporal, date, &Unit::Year).unwrap();
    let days = divide(&temporal, &year, &Unit::Day).unwrap();
    assert_eq!(days.len(), 100);
}
