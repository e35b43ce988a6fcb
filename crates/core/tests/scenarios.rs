use std::sync::Arc;

use tempora_core::{
    Instant, Temporal, TemporalOptions, Unit, contains, divide, go, is_same, merge, next,
    previous, to_period,
};
use tempora_native::{NativeAdapter, ymd, ymd_hms};

fn temporal_at(date: Instant) -> Temporal {
    let options = TemporalOptions::new(date)
        .with_adapter(Arc::new(NativeAdapter))
        .with_now(date)
        .with_week_starts_on(1);
    Temporal::new(options).unwrap()
}

#[test]
fn leap_february_bounds_and_days() {
    let date = ymd(2024, 2, 15).unwrap();
    let temporal = temporal_at(date);
    let february = to_period(&temporal, date, &Unit::Month).unwrap();

    assert_eq!(february.start(), ymd(2024, 2, 1).unwrap());
    assert_eq!(
        february.end(),
        ymd_hms(2024, 2, 29, 23, 59, 59).unwrap().add_millis(999)
    );
    assert_eq!(february.reference(), date);

    let days = divide(&temporal, &february, &Unit::Day).unwrap();
    assert_eq!(days.len(), 29);
    assert_eq!(days[0].start(), february.start());
    assert_eq!(days[28].end(), february.end());
}

#[test]
fn monday_week_divides_into_seven_days() {
    let date = ymd(2024, 6, 10).unwrap();
    let temporal = temporal_at(date);
    let week = to_period(&temporal, date, &Unit::Week).unwrap();
    let days = divide(&temporal, &week, &Unit::Day).unwrap();

    assert_eq!(days.len(), 7);
    assert_eq!(days[0].start(), ymd(2024, 6, 10).unwrap());
    assert_eq!(days[6].start(), ymd(2024, 6, 16).unwrap());
    assert_eq!(days[0].start().weekday(), 1);
    assert_eq!(days[6].start().weekday(), 0);
}

#[test]
fn seven_aligned_days_merge_into_week() {
    let date = ymd(2024, 6, 12).unwrap();
    let temporal = temporal_at(date);
    let week = to_period(&temporal, date, &Unit::Week).unwrap();
    let days = divide(&temporal, &week, &Unit::Day).unwrap();

    let merged = merge(&temporal, &days).unwrap();
    assert_eq!(*merged.unit(), Unit::Week);
    assert_eq!(merged.start(), week.start());
    assert_eq!(merged.end(), week.end());
}

#[test]
fn seven_unaligned_days_merge_into_custom() {
    let date = ymd(2024, 6, 12).unwrap();
    let temporal = temporal_at(date);
    let mut days = Vec::new();
    let mut day = to_period(&temporal, date, &Unit::Day).unwrap();
    for _ in 0..7 {
        days.push(day.clone());
        day = next(&temporal, &day).unwrap();
    }
    let merged = merge(&temporal, &days).unwrap();
    assert_eq!(*merged.unit(), Unit::Custom);
    assert_eq!(merged.start(), days[0].start());
    assert_eq!(merged.end(), days[6].end());
}

#[test]
fn shuffled_month_of_days_merges_into_month() {
    let date = ymd(2023, 2, 10).unwrap();
    let temporal = temporal_at(date);
    let february = to_period(&temporal, date, &Unit::Month).unwrap();
    let mut days = divide(&temporal, &february, &Unit::Day).unwrap();
    days.reverse();

    let merged = merge(&temporal, &days).unwrap();
    assert_eq!(*merged.unit(), Unit::Month);
    assert_eq!(merged.start(), february.start());
    assert_eq!(merged.end(), february.end());
}

#[test]
fn month_navigation_is_symmetric_across_leap_day() {
    let date = ymd(2024, 2, 15).unwrap();
    let temporal = temporal_at(date);
    let february = to_period(&temporal, date, &Unit::Month).unwrap();

    let march = next(&temporal, &february).unwrap();
    assert_eq!(march.start(), ymd(2024, 3, 1).unwrap());
    assert_eq!(*march.unit(), Unit::Month);

    let back = previous(&temporal, &march).unwrap();
    assert_eq!(back, february);
    assert_eq!(divide(&temporal, &back, &Unit::Day).unwrap().len(), 29);
}

#[test]
fn go_thirteen_months_from_january() {
    let date = ymd(2024, 1, 1).unwrap();
    let temporal = temporal_at(date);
    let january = to_period(&temporal, date, &Unit::Month).unwrap();

    let landed = go(&temporal, &january, 13).unwrap();
    assert_eq!(landed.start(), ymd(2025, 2, 1).unwrap());
    assert_eq!(landed.end(), ymd(2025, 3, 1).unwrap().add_millis(-1));
    assert_eq!(*landed.unit(), Unit::Month);

    let home = go(&temporal, &landed, -13).unwrap();
    assert_eq!(home.start(), january.start());
}

#[test]
fn month_end_reference_survives_short_months() {
    let date = ymd(2024, 1, 31).unwrap();
    let temporal = temporal_at(date);
    let january = to_period(&temporal, date, &Unit::Month).unwrap();

    let february = next(&temporal, &january).unwrap();
    assert_eq!(february.start(), ymd(2024, 2, 1).unwrap());
    assert_eq!(february.reference(), ymd(2024, 2, 29).unwrap());

    let march = next(&temporal, &february).unwrap();
    assert_eq!(march.start(), ymd(2024, 3, 1).unwrap());
}

#[test]
fn containment_reflexivity() {
    let date = ymd_hms(2024, 6, 12, 15, 30, 0).unwrap();
    let temporal = temporal_at(date);
    for unit in Unit::BUILTIN {
        let period = to_period(&temporal, date, &unit).unwrap();
        assert!(contains(&period, &period.reference()), "{unit}");
        assert!(contains(&period, &period.start()), "{unit}");
        assert!(contains(&period, &period.end()), "{unit}");
        assert!(contains(&period, &period), "{unit}");
    }
}

#[test]
fn year_contains_its_months() {
    let date = ymd(2024, 6, 12).unwrap();
    let temporal = temporal_at(date);
    let year = to_period(&temporal, date, &Unit::Year).unwrap();
    for month in divide(&temporal, &year, &Unit::Month).unwrap() {
        assert!(contains(&year, &month));
        assert!(!contains(&month, &year));
    }
}

#[test]
fn is_same_null_safety() {
    let date = ymd(2024, 6, 12).unwrap();
    let temporal = temporal_at(date);
    let day = to_period(&temporal, date, &Unit::Day).unwrap();
    assert!(!is_same(&temporal, None, Some(&day), &Unit::Day));
    assert!(!is_same(&temporal, None, None, &Unit::Day));
}

#[test]
fn is_same_compares_references() {
    let date = ymd_hms(2024, 6, 12, 8, 0, 0).unwrap();
    let temporal = temporal_at(date);
    let morning = to_period(&temporal, date, &Unit::Hour).unwrap();
    let evening =
        to_period(&temporal, ymd_hms(2024, 6, 12, 20, 0, 0).unwrap(), &Unit::Hour).unwrap();
    assert!(is_same(&temporal, Some(&morning), Some(&evening), &Unit::Day));
    assert!(!is_same(&temporal, Some(&morning), Some(&evening), &Unit::Hour));
}
