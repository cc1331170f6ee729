//! Cleaning statistics and result structures

use crate::app::models::CleanRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a record was excluded during cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Start_Time absent or unparseable
    InvalidStartTime,
    /// End_Time absent or unparseable
    InvalidEndTime,
    MissingLatitude,
    MissingLongitude,
    MissingWeatherCondition,
    MissingRoadCondition,
}

impl ExclusionReason {
    /// All reasons in the order checks are applied
    pub const ALL: [ExclusionReason; 6] = [
        ExclusionReason::InvalidStartTime,
        ExclusionReason::InvalidEndTime,
        ExclusionReason::MissingLatitude,
        ExclusionReason::MissingLongitude,
        ExclusionReason::MissingWeatherCondition,
        ExclusionReason::MissingRoadCondition,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            ExclusionReason::InvalidStartTime => "invalid or missing Start_Time",
            ExclusionReason::InvalidEndTime => "invalid or missing End_Time",
            ExclusionReason::MissingLatitude => "missing Start_Lat",
            ExclusionReason::MissingLongitude => "missing Start_Lng",
            ExclusionReason::MissingWeatherCondition => "missing Weather_Condition",
            ExclusionReason::MissingRoadCondition => "missing Road_Condition",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Statistics for the cleaning stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningStats {
    /// Number of raw records received
    pub total_input: usize,
    /// Number of clean records produced
    pub retained: usize,
    pub invalid_start_time: usize,
    pub invalid_end_time: usize,
    pub missing_latitude: usize,
    pub missing_longitude: usize,
    pub missing_weather_condition: usize,
    pub missing_road_condition: usize,
}

impl CleaningStats {
    /// Create new empty cleaning statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one excluded record
    pub fn record_exclusion(&mut self, reason: ExclusionReason) {
        *self.counter_mut(reason) += 1;
    }

    /// Number of records excluded for a reason
    pub fn excluded_for(&self, reason: ExclusionReason) -> usize {
        match reason {
            ExclusionReason::InvalidStartTime => self.invalid_start_time,
            ExclusionReason::InvalidEndTime => self.invalid_end_time,
            ExclusionReason::MissingLatitude => self.missing_latitude,
            ExclusionReason::MissingLongitude => self.missing_longitude,
            ExclusionReason::MissingWeatherCondition => self.missing_weather_condition,
            ExclusionReason::MissingRoadCondition => self.missing_road_condition,
        }
    }

    /// Total number of excluded records
    pub fn excluded(&self) -> usize {
        ExclusionReason::ALL
            .iter()
            .map(|reason| self.excluded_for(*reason))
            .sum()
    }

    /// Percentage of input records retained
    pub fn retention_rate(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            (self.retained as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Non-zero exclusion counts in check order
    pub fn exclusions(&self) -> Vec<(ExclusionReason, usize)> {
        ExclusionReason::ALL
            .iter()
            .map(|reason| (*reason, self.excluded_for(*reason)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Summary line for logging
    pub fn summary(&self) -> String {
        format!(
            "Cleaning Summary: {} -> {} records ({:.1}% retained) | Excluded: {}",
            self.total_input,
            self.retained,
            self.retention_rate(),
            self.excluded()
        )
    }

    fn counter_mut(&mut self, reason: ExclusionReason) -> &mut usize {
        match reason {
            ExclusionReason::InvalidStartTime => &mut self.invalid_start_time,
            ExclusionReason::InvalidEndTime => &mut self.invalid_end_time,
            ExclusionReason::MissingLatitude => &mut self.missing_latitude,
            ExclusionReason::MissingLongitude => &mut self.missing_longitude,
            ExclusionReason::MissingWeatherCondition => &mut self.missing_weather_condition,
            ExclusionReason::MissingRoadCondition => &mut self.missing_road_condition,
        }
    }
}

/// Result of the cleaning stage
#[derive(Debug, Clone)]
pub struct CleaningResult {
    /// Surviving records in source order
    pub records: Vec<CleanRecord>,
    pub stats: CleaningStats,
}

impl CleaningResult {
    /// Get the number of clean records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when every record was excluded
    pub fn is_degenerate(&self) -> bool {
        self.records.is_empty()
    }
}
