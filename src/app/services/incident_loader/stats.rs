//! Load statistics and result structures

use crate::app::models::RawDataset;

/// Result of loading one source
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Every data row of the source, in file order
    pub dataset: RawDataset,

    /// Basic load statistics
    pub stats: LoadStats,
}

/// Simple load statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Data rows encountered, including blank ones
    pub rows_read: usize,

    /// Records handed to the cleaner
    pub records_loaded: usize,

    /// Rows with only blank fields
    pub blank_rows_skipped: usize,

    /// Number of unrecognized columns carried through
    pub passthrough_columns: usize,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary line for logging
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} records from {} rows ({} blank rows skipped, {} passthrough columns)",
            self.records_loaded, self.rows_read, self.blank_rows_skipped, self.passthrough_columns
        )
    }
}
