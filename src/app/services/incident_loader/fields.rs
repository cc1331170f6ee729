//! Field extraction helpers for incident rows

use crate::constants::MISSING_VALUE_MARKERS;
use crate::{Error, Result};
use csv::StringRecord;
use std::path::Path;

/// Check if a field value represents absent data
pub fn is_missing_value(value: &str) -> bool {
    MISSING_VALUE_MARKERS.contains(&value.trim())
}

/// Get a present text value, or `None` when the field is absent or short
pub fn optional_text(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !is_missing_value(value))
        .map(str::to_string)
}

/// Parse an optional coordinate
///
/// Absent values yield `None`. A present value that is not a finite number
/// makes the whole source malformed.
pub fn optional_coordinate(
    record: &StringRecord,
    index: usize,
    column: &str,
    line: u64,
    source: &Path,
) -> Result<Option<f64>> {
    let Some(value) = optional_text(record, index) else {
        return Ok(None);
    };

    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(Error::malformed_source(
            source,
            Some(line),
            format!("invalid numeric value for {}: '{}'", column, value),
        )),
    }
}

/// Check whether every field of a row is blank
pub fn is_blank_row(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
