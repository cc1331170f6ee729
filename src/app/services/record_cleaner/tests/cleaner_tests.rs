//! Tests for exclusion-only cleaning

use super::super::cleaner::{apply_cleaning, clean_record};
use super::super::stats::ExclusionReason;
use super::create_raw_record;
use chrono::Timelike;

#[test]
fn test_complete_record_is_kept() {
    let raw = create_raw_record(2, "2023-06-15 08:30:00");
    let clean = clean_record(raw.clone()).unwrap();

    assert_eq!(clean.line, 2);
    assert_eq!(clean.start_time.hour(), 8);
    assert_eq!(clean.start_lat, raw.start_lat.unwrap());
    assert_eq!(clean.start_lng, raw.start_lng.unwrap());
    assert_eq!(clean.weather_condition, "Clear");
    assert_eq!(clean.road_condition, "Dry");
    assert_eq!(clean.severity.as_deref(), Some("2"));
}

#[test]
fn test_each_missing_field_excludes() {
    let mut raw = create_raw_record(2, "2023-06-15 08:30:00");
    raw.start_lat = None;
    assert_eq!(clean_record(raw), Err(ExclusionReason::MissingLatitude));

    let mut raw = create_raw_record(2, "2023-06-15 08:30:00");
    raw.start_lng = None;
    assert_eq!(clean_record(raw), Err(ExclusionReason::MissingLongitude));

    let mut raw = create_raw_record(2, "2023-06-15 08:30:00");
    raw.weather_condition = None;
    assert_eq!(
        clean_record(raw),
        Err(ExclusionReason::MissingWeatherCondition)
    );

    let mut raw = create_raw_record(2, "2023-06-15 08:30:00");
    raw.road_condition = None;
    assert_eq!(clean_record(raw), Err(ExclusionReason::MissingRoadCondition));
}

#[test]
fn test_bad_timestamps_exclude() {
    let raw = create_raw_record(2, "not a time");
    assert_eq!(clean_record(raw), Err(ExclusionReason::InvalidStartTime));

    let mut raw = create_raw_record(2, "2023-06-15 08:30:00");
    raw.end_time = None;
    assert_eq!(clean_record(raw), Err(ExclusionReason::InvalidEndTime));
}

#[test]
fn test_timestamp_checked_before_fields() {
    let mut raw = create_raw_record(2, "garbage");
    raw.road_condition = None;
    assert_eq!(clean_record(raw), Err(ExclusionReason::InvalidStartTime));
}

#[test]
fn test_missing_severity_is_not_excluded() {
    let mut raw = create_raw_record(2, "2023-06-15 08:30:00");
    raw.severity = None;
    assert_eq!(clean_record(raw).unwrap().severity, None);
}

#[test]
fn test_apply_cleaning_preserves_order_and_counts() {
    let mut records: Vec<_> = (2..8)
        .map(|line| create_raw_record(line, "2023-06-15 08:30:00"))
        .collect();
    records[1].start_lat = None;
    records[3].road_condition = None;
    records[4].start_time = Some("??".to_string());

    let result = apply_cleaning(records);

    assert_eq!(result.record_count(), 3);
    assert_eq!(
        result.records.iter().map(|r| r.line).collect::<Vec<_>>(),
        vec![2, 4, 7]
    );
    assert_eq!(result.stats.total_input, 6);
    assert_eq!(result.stats.retained, 3);
    assert_eq!(result.stats.excluded(), 3);
    assert_eq!(result.stats.missing_latitude, 1);
    assert_eq!(result.stats.missing_road_condition, 1);
    assert_eq!(result.stats.invalid_start_time, 1);
}

#[test]
fn test_apply_cleaning_all_excluded_is_not_an_error() {
    let records: Vec<_> = (2..5)
        .map(|line| {
            let mut raw = create_raw_record(line, "2023-06-15 08:30:00");
            raw.road_condition = None;
            raw
        })
        .collect();

    let result = apply_cleaning(records);

    assert!(result.is_degenerate());
    assert_eq!(result.stats.missing_road_condition, 3);
    assert_eq!(result.stats.retention_rate(), 0.0);
}

#[test]
fn test_apply_cleaning_empty_input() {
    let result = apply_cleaning(Vec::new());
    assert!(result.is_degenerate());
    assert_eq!(result.stats.total_input, 0);
}
