//! Data models for traffic incident analysis
//!
//! Records move through three immutable shapes: [`RawRecord`] as read from the
//! source, [`CleanRecord`] once timestamps are parsed and required fields are
//! guaranteed present, and [`ClassifiedRecord`] with the derived time-of-day
//! label. [`SummaryTable`] and [`DensityMap`] are the terminal artifacts handed
//! to report assembly.

use crate::constants::{MISSING_CATEGORY_LABEL, time_of_day};
use crate::{Error, Result};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Passthrough Columns
// =============================================================================

/// Values of source columns the analysis does not interpret
///
/// Column names are shared between all records of a dataset; each record only
/// owns its values, kept in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct PassthroughFields {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl PassthroughFields {
    /// Pair shared column names with one record's values
    ///
    /// Missing trailing values are stored as empty strings so every column
    /// always has an entry.
    pub fn new(columns: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.resize(columns.len(), String::new());
        Self { columns, values }
    }

    /// Create an empty bag for sources without extra columns
    pub fn empty() -> Self {
        Self {
            columns: Arc::from(Vec::<String>::new()),
            values: Vec::new(),
        }
    }

    /// Look up a value by column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|index| self.values[index].as_str())
    }

    /// Iterate over (column, value) pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// =============================================================================
// Record Shapes
// =============================================================================

/// One data row of the source table
///
/// Recognized columns are typed; `None` means the field was absent (empty or a
/// missing-value marker). Timestamps stay as text until cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based line number in the source file
    pub line: u64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub weather_condition: Option<String>,
    pub road_condition: Option<String>,
    pub severity: Option<String>,
    pub extra: PassthroughFields,
}

/// Records loaded from one source, in file order
#[derive(Debug, Clone)]
pub struct RawDataset {
    /// Path the records were read from
    pub source: PathBuf,
    /// Names of unrecognized columns, in header order
    pub passthrough_columns: Arc<[String]>,
    pub records: Vec<RawRecord>,
}

impl RawDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A record with parsed timestamps and all exclusion-set fields present
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub line: u64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_lat: f64,
    pub start_lng: f64,
    pub weather_condition: String,
    pub road_condition: String,
    /// Severity is not part of the exclusion set and may still be absent
    pub severity: Option<String>,
    pub extra: PassthroughFields,
}

/// Coarse time-of-day bucket derived from an incident's start hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// All buckets in chronological order
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Night,
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
    ];

    /// Classify an hour of the day using half-open boundaries
    ///
    /// `[0,6)` Night, `[6,12)` Morning, `[12,18)` Afternoon, `[18,24)` Evening.
    /// Hours above 23 cannot come from a parsed timestamp and fall into Evening.
    pub fn from_hour(hour: u32) -> Self {
        if hour < time_of_day::MORNING_START_HOUR {
            TimeOfDay::Night
        } else if hour < time_of_day::AFTERNOON_START_HOUR {
            TimeOfDay::Morning
        } else if hour < time_of_day::EVENING_START_HOUR {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }

    /// Classify a timestamp by its hour component
    pub fn from_datetime(timestamp: &NaiveDateTime) -> Self {
        Self::from_hour(timestamp.hour())
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Night => "Night",
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A clean record augmented with its time-of-day label
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub record: CleanRecord,
    pub time_of_day: TimeOfDay,
}

impl ClassifiedRecord {
    /// Category value of this record along a condition dimension
    pub fn category(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Severity => self
                .record
                .severity
                .as_deref()
                .unwrap_or(MISSING_CATEGORY_LABEL),
            Dimension::WeatherCondition => &self.record.weather_condition,
            Dimension::RoadCondition => &self.record.road_condition,
            Dimension::TimeOfDay => self.time_of_day.label(),
        }
    }

    /// Incident location as a map point
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.record.start_lat,
            longitude: self.record.start_lng,
        }
    }
}

// =============================================================================
// Condition Dimensions
// =============================================================================

/// Categorical axis used for frequency aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Severity,
    WeatherCondition,
    RoadCondition,
    TimeOfDay,
}

impl Dimension {
    /// All dimensions in report order
    pub const ALL: [Dimension; 4] = [
        Dimension::Severity,
        Dimension::WeatherCondition,
        Dimension::RoadCondition,
        Dimension::TimeOfDay,
    ];

    /// Human-readable name used in charts and tables
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Severity => "Severity",
            Dimension::WeatherCondition => "Weather Condition",
            Dimension::RoadCondition => "Road Condition",
            Dimension::TimeOfDay => "Time of Day",
        }
    }

    /// Identifier used in configuration files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Severity => "severity",
            Dimension::WeatherCondition => "weather_condition",
            Dimension::RoadCondition => "road_condition",
            Dimension::TimeOfDay => "time_of_day",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "severity" => Ok(Dimension::Severity),
            "weather" | "weather_condition" => Ok(Dimension::WeatherCondition),
            "road" | "road_condition" => Ok(Dimension::RoadCondition),
            "time" | "time_of_day" => Ok(Dimension::TimeOfDay),
            _ => Err(Error::configuration(format!(
                "Unknown dimension '{}'. Expected one of: severity, weather_condition, road_condition, time_of_day",
                s.trim()
            ))),
        }
    }
}

// =============================================================================
// Aggregation Results
// =============================================================================

/// Occurrence count of one category value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Category counts for one dimension, most frequent first
///
/// Ties keep the order in which categories were first encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub dimension: Dimension,
    pub entries: Vec<CategoryCount>,
}

/// Describe-style statistics for one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDescription {
    pub dimension: Dimension,
    /// Number of records counted
    pub count: usize,
    /// Number of distinct categories
    pub unique: usize,
    /// Most frequent category
    pub top: Option<String>,
    /// Count of the most frequent category
    pub freq: Option<usize>,
}

impl FrequencyTable {
    /// Create an empty table for a dimension
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Sum of all category counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of distinct categories
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    /// Most frequent category, first-encountered on ties
    pub fn top(&self) -> Option<&CategoryCount> {
        self.entries.first()
    }

    /// Count for a specific category, if it occurred
    pub fn count_of(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn describe(&self) -> DimensionDescription {
        DimensionDescription {
            dimension: self.dimension,
            count: self.total(),
            unique: self.unique(),
            top: self.top().map(|e| e.category.clone()),
            freq: self.top().map(|e| e.count),
        }
    }
}

/// Frequency tables for every condition dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    /// Number of classified records aggregated
    pub record_count: usize,
    /// One table per dimension, in [`Dimension::ALL`] order
    pub tables: Vec<FrequencyTable>,
}

impl SummaryTable {
    /// Summary with an empty table for every dimension
    pub fn empty() -> Self {
        Self {
            record_count: 0,
            tables: Dimension::ALL
                .iter()
                .map(|d| FrequencyTable::empty(*d))
                .collect(),
        }
    }

    /// Table for a dimension
    pub fn table(&self, dimension: Dimension) -> Option<&FrequencyTable> {
        self.tables.iter().find(|t| t.dimension == dimension)
    }

    /// True when no records were aggregated
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Describe-style statistics for every dimension
    pub fn describe(&self) -> Vec<DimensionDescription> {
        self.tables.iter().map(FrequencyTable::describe).collect()
    }
}

// =============================================================================
// Spatial Density
// =============================================================================

/// WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Extent of all density points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// Input to density rendering: every incident location plus a map center
///
/// Points are kept one per classified record, in record order, without
/// deduplication or weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityMap {
    pub points: Vec<GeoPoint>,
    /// Arithmetic mean of all latitudes and all longitudes
    pub center: GeoPoint,
    pub bounds: BoundingBox,
}

impl DensityMap {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
