//! Core incident source loader
//!
//! Handles file access, header validation and row iteration, and maps every
//! failure onto the source error taxonomy.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::fields::{is_blank_row, optional_coordinate, optional_text};
use super::stats::{LoadResult, LoadStats};
use crate::app::models::{PassthroughFields, RawDataset, RawRecord};
use crate::config::InputConfig;
use crate::constants::{DEFAULT_DELIMITER, columns};
use crate::{Error, Result};

/// Loader for delimited incident sources
#[derive(Debug, Clone)]
pub struct IncidentLoader {
    delimiter: u8,
}

impl Default for IncidentLoader {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl IncidentLoader {
    /// Create a loader for the given field delimiter
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Create a loader from input configuration
    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(config.delimiter_byte())
    }

    /// Load every record of a source file
    pub fn load(&self, path: &Path) -> Result<LoadResult> {
        info!("Loading incident records from {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::source_not_found(path),
            _ => Error::unknown_failure(
                path,
                format!("cannot open source: {}", e),
                Some(Box::new(e)),
            ),
        })?;

        let metadata = file.metadata().map_err(|e| {
            Error::unknown_failure(
                path,
                format!("cannot inspect source: {}", e),
                Some(Box::new(e)),
            )
        })?;
        if metadata.is_dir() {
            return Err(Error::unknown_failure(path, "source is a directory", None));
        }

        self.load_reader(file, path)
    }

    /// Load records from any reader; `source` is only used in messages and results
    pub fn load_reader<R: Read>(&self, reader: R, source: &Path) -> Result<LoadResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = csv_reader.records();

        // Leading blank lines are skipped; the first non-blank row is the header
        let headers = loop {
            match rows.next() {
                None => return Err(Error::empty_source(source)),
                Some(result) => {
                    let record = result.map_err(|e| map_csv_error(e, source))?;
                    if !is_blank_row(&record) {
                        break record;
                    }
                }
            }
        };

        let mapping = ColumnMapping::analyze(&headers, source)?;
        debug!(
            "Column mapping: {} columns, {} passthrough",
            mapping.width,
            mapping.passthrough_columns.len()
        );

        let mut stats = LoadStats {
            passthrough_columns: mapping.passthrough_columns.len(),
            ..LoadStats::new()
        };
        let mut records = Vec::new();

        for result in rows {
            let record = result.map_err(|e| map_csv_error(e, source))?;
            stats.rows_read += 1;

            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(stats.rows_read as u64 + 1);

            if is_blank_row(&record) {
                stats.blank_rows_skipped += 1;
                continue;
            }

            if record.len() > mapping.width {
                return Err(Error::malformed_source(
                    source,
                    Some(line),
                    format!(
                        "expected {} fields, found {}",
                        mapping.width,
                        record.len()
                    ),
                ));
            }

            records.push(parse_raw_record(&record, &mapping, line, source)?);
        }

        if records.is_empty() {
            return Err(Error::empty_source(source));
        }

        stats.records_loaded = records.len();
        info!("{}", stats.summary());

        Ok(LoadResult {
            dataset: RawDataset {
                source: source.to_path_buf(),
                passthrough_columns: mapping.passthrough_columns.clone(),
                records,
            },
            stats,
        })
    }
}

/// Build a typed raw record from one CSV row
fn parse_raw_record(
    record: &csv::StringRecord,
    mapping: &ColumnMapping,
    line: u64,
    source: &Path,
) -> Result<RawRecord> {
    let extra_values = mapping
        .passthrough_indices
        .iter()
        .map(|&index| record.get(index).unwrap_or_default().to_string())
        .collect();

    Ok(RawRecord {
        line,
        start_time: optional_text(record, mapping.start_time),
        end_time: optional_text(record, mapping.end_time),
        start_lat: optional_coordinate(
            record,
            mapping.start_lat,
            columns::START_LAT,
            line,
            source,
        )?,
        start_lng: optional_coordinate(
            record,
            mapping.start_lng,
            columns::START_LNG,
            line,
            source,
        )?,
        weather_condition: optional_text(record, mapping.weather_condition),
        road_condition: optional_text(record, mapping.road_condition),
        severity: optional_text(record, mapping.severity),
        extra: PassthroughFields::new(mapping.passthrough_columns.clone(), extra_values),
    })
}

/// Map a CSV reader error onto the source error taxonomy
fn map_csv_error(error: csv::Error, source: &Path) -> Error {
    let line = error.position().map(|p| p.line());

    if matches!(error.kind(), csv::ErrorKind::Io(_)) {
        let message = format!("read failed: {}", error);
        return Error::unknown_failure(source, message, Some(Box::new(error)));
    }

    if matches!(error.kind(), csv::ErrorKind::Utf8 { .. }) {
        return Error::malformed_source(source, line, "invalid UTF-8 in source");
    }

    Error::malformed_source(source, line, error.to_string())
}
