//! Artifact writing and the machine-readable run summary

use super::assembler::ReportInput;
use crate::app::models::{BoundingBox, GeoPoint, SummaryTable};
use crate::app::services::incident_loader::LoadStats;
use crate::app::services::record_cleaner::CleaningStats;
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write one artifact into the output directory, replacing any previous file
pub fn write_artifact(output_dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    let path = output_dir.join(file_name);
    std::fs::write(&path, contents).map_err(|e| Error::output(&path, e.to_string()))?;
    debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path)
}

/// Remove an artifact left by an earlier run that this run does not produce
pub fn remove_stale_artifact(output_dir: &Path, file_name: &str) -> Result<()> {
    let path = output_dir.join(file_name);
    match std::fs::remove_file(&path) {
        Ok(()) => {
            debug!("Removed stale {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::output(&path, format!("cannot remove stale artifact: {}", e))),
    }
}

/// Density facts carried in the JSON summary
#[derive(Debug, Clone, Serialize)]
pub struct DensitySummary {
    pub point_count: usize,
    pub center: GeoPoint,
    pub bounds: BoundingBox,
}

/// Contents of `summary.json`
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary<'a> {
    pub source: &'a Path,
    pub load: &'a LoadStats,
    pub cleaning: &'a CleaningStats,
    pub summary: &'a SummaryTable,
    /// Absent when no records survived cleaning
    pub density: Option<DensitySummary>,
}

impl<'a> ReportSummary<'a> {
    pub fn from_input(input: &ReportInput<'a>) -> Self {
        Self {
            source: input.source,
            load: input.load_stats,
            cleaning: input.cleaning_stats,
            summary: input.summary,
            density: input.density.map(|map| DensitySummary {
                point_count: map.point_count(),
                center: map.center,
                bounds: map.bounds,
            }),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
