//! Test utilities for incident loader testing
//!
//! Shared fixtures for building source files in temporary locations.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod column_mapping_tests;

/// Header with every recognized column plus two passthrough columns
pub const FULL_HEADER: &str =
    "ID,Severity,Start_Time,End_Time,Start_Lat,Start_Lng,City,Weather_Condition,Road_Condition";

/// Helper to create a source with five rows, the third missing Start_Lat
pub fn create_test_source_csv() -> String {
    format!(
        "{FULL_HEADER}
A-1,2,2023-01-01 02:10:00,2023-01-01 03:00:00,39.10,-84.50,Dayton,Rain,Wet
A-2,3,2023-01-01 08:05:00,2023-01-01 09:00:00,39.20,-84.60,Dayton,Fair,Dry
A-3,2,2023-01-01 11:00:00,2023-01-01 12:00:00,,-84.70,Columbus,Fair,Dry
A-4,1,2023-01-01 14:45:00,2023-01-01 15:00:00,39.40,-84.80,Columbus,Snow,Icy
A-5,2,2023-01-01 20:30:00,2023-01-01 21:00:00,39.50,-84.90,Akron,Fair,Dry"
    )
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
