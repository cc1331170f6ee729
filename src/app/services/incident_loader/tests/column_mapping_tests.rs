//! Tests for header analysis

use super::super::column_mapping::ColumnMapping;
use super::FULL_HEADER;
use crate::Error;
use csv::StringRecord;
use std::path::Path;

fn header(line: &str) -> StringRecord {
    StringRecord::from(line.split(',').collect::<Vec<_>>())
}

#[test]
fn test_recognized_columns_resolved() {
    let mapping = ColumnMapping::analyze(&header(FULL_HEADER), Path::new("t.csv")).unwrap();

    assert_eq!(mapping.severity, 1);
    assert_eq!(mapping.start_time, 2);
    assert_eq!(mapping.end_time, 3);
    assert_eq!(mapping.start_lat, 4);
    assert_eq!(mapping.start_lng, 5);
    assert_eq!(mapping.weather_condition, 7);
    assert_eq!(mapping.road_condition, 8);
    assert_eq!(mapping.width, 9);
    assert!(mapping.has_column("City"));
    assert_eq!(mapping.get_index("ID"), Some(0));
}

#[test]
fn test_passthrough_columns_in_header_order() {
    let mapping = ColumnMapping::analyze(&header(FULL_HEADER), Path::new("t.csv")).unwrap();

    assert_eq!(mapping.passthrough_indices, vec![0, 6]);
    assert_eq!(
        mapping.passthrough_columns.to_vec(),
        vec!["ID".to_string(), "City".to_string()]
    );
}

#[test]
fn test_missing_columns_are_malformed() {
    let result = ColumnMapping::analyze(
        &header("Start_Time,End_Time,Start_Lat,Start_Lng,Severity"),
        Path::new("t.csv"),
    );

    match result {
        Err(Error::MalformedSource { line, reason, .. }) => {
            assert_eq!(line, Some(1));
            assert!(reason.contains("Weather_Condition"));
            assert!(reason.contains("Road_Condition"));
        }
        other => panic!("Expected MalformedSource, got {:?}", other),
    }
}

#[test]
fn test_duplicated_recognized_column_is_malformed() {
    let line = format!("{FULL_HEADER},Severity");
    let result = ColumnMapping::analyze(&header(&line), Path::new("t.csv"));

    match result {
        Err(Error::MalformedSource { reason, .. }) => assert!(reason.contains("Severity")),
        other => panic!("Expected MalformedSource, got {:?}", other),
    }
}
