//! Header analysis for incident sources
//!
//! Resolves the recognized columns to their positions and collects every
//! other column into the passthrough list.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Positions of the recognized columns within a header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping (first occurrence wins)
    pub name_to_index: HashMap<String, usize>,

    pub start_time: usize,
    pub end_time: usize,
    pub start_lat: usize,
    pub start_lng: usize,
    pub weather_condition: usize,
    pub road_condition: usize,
    pub severity: usize,

    /// Indices of unrecognized columns, in header order
    pub passthrough_indices: Vec<usize>,

    /// Names of unrecognized columns, shared with every loaded record
    pub passthrough_columns: Arc<[String]>,

    /// Number of header fields
    pub width: usize,
}

impl ColumnMapping {
    /// Analyze a header row
    ///
    /// Every recognized column must appear exactly once; otherwise the source
    /// is malformed because the analysis could not tell which value to use.
    pub fn analyze(headers: &StringRecord, source: &Path) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        let mut duplicated = Vec::new();
        let mut passthrough_indices = Vec::new();
        let mut passthrough_columns = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim_start_matches('\u{feff}').trim().to_string();

            if columns::RECOGNIZED.contains(&column_name.as_str()) {
                if name_to_index.contains_key(&column_name) {
                    duplicated.push(column_name.clone());
                }
            } else {
                passthrough_indices.push(index);
                passthrough_columns.push(column_name.clone());
            }

            name_to_index.entry(column_name).or_insert(index);
        }

        let missing: Vec<&str> = columns::RECOGNIZED
            .iter()
            .copied()
            .filter(|name| !name_to_index.contains_key(*name))
            .collect();
        let header_line = headers.position().map(|p| p.line()).unwrap_or(1);

        if !missing.is_empty() {
            return Err(Error::malformed_source(
                source,
                Some(header_line),
                format!("missing required columns: {}", missing.join(", ")),
            ));
        }

        if !duplicated.is_empty() {
            return Err(Error::malformed_source(
                source,
                Some(header_line),
                format!("duplicated columns: {}", duplicated.join(", ")),
            ));
        }

        let index_of = |name: &str| name_to_index[name];

        Ok(ColumnMapping {
            start_time: index_of(columns::START_TIME),
            end_time: index_of(columns::END_TIME),
            start_lat: index_of(columns::START_LAT),
            start_lng: index_of(columns::START_LNG),
            weather_condition: index_of(columns::WEATHER_CONDITION),
            road_condition: index_of(columns::ROAD_CONDITION),
            severity: index_of(columns::SEVERITY),
            passthrough_indices,
            passthrough_columns: Arc::from(passthrough_columns),
            width: headers.len(),
            name_to_index,
        })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }
}
