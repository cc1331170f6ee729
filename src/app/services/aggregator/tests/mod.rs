//! Tests for the aggregator


use crate::app::models::{ClassifiedRecord, CleanRecord, PassthroughFields, TimeOfDay};
use chrono::NaiveDate;

/// Create a classified record with the given categories and start hour
pub fn create_classified(
    weather: &str,
    road: &str,
    severity: Option<&str>,
    hour: u32,
) -> ClassifiedRecord {
    let start_time = NaiveDate::from_ymd_opt(2022, 11, 3)
        .unwrap()
        .and_hms_opt(hour, 15, 0)
        .unwrap();
    ClassifiedRecord {
        record: CleanRecord {
            line: 2,
            start_time,
            end_time: start_time,
            start_lat: 39.96,
            start_lng: -82.99,
            weather_condition: weather.to_string(),
            road_condition: road.to_string(),
            severity: severity.map(str::to_string),
            extra: PassthroughFields::empty(),
        },
        time_of_day: TimeOfDay::from_hour(hour),
    }
}
