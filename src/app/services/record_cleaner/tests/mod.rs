//! Tests for the record cleaner

pub mod cleaner_tests;

use crate::app::models::{PassthroughFields, RawRecord};

/// Create a complete raw record that survives cleaning
pub fn create_raw_record(line: u64, start_time: &str) -> RawRecord {
    RawRecord {
        line,
        start_time: Some(start_time.to_string()),
        end_time: Some("2023-06-15 23:59:00".to_string()),
        start_lat: Some(40.0 + line as f64 / 10.0),
        start_lng: Some(-75.0 - line as f64 / 10.0),
        weather_condition: Some("Clear".to_string()),
        road_condition: Some("Dry".to_string()),
        severity: Some("2".to_string()),
        extra: PassthroughFields::empty(),
    }
}
