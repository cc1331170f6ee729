//! End-to-end analysis pipeline
//!
//! Runs Loader → Cleaner → Temporal Classifier → {Aggregator, Spatial Density
//! Builder} → Report Assembler as a synchronous batch. Each stage consumes
//! its input completely and hands a new value to the next. Loader failures
//! stop the run before cleaning; a degenerate density input is logged and
//! carried as `None` so the report can skip the map.

use crate::app::models::{DensityMap, SummaryTable};
use crate::app::services::aggregator::build_summary;
use crate::app::services::incident_loader::{IncidentLoader, LoadStats};
use crate::app::services::record_cleaner::{CleaningResult, CleaningStats, apply_cleaning};
use crate::app::services::report::{ReportArtifacts, ReportAssembler, ReportInput};
use crate::app::services::spatial_density::build_density_map;
use crate::app::services::temporal_classifier::classify_records;
use crate::config::Config;
use crate::Result;
use indicatif::ProgressBar;
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything the analysis stages produced for one source
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub source: PathBuf,
    pub load_stats: LoadStats,
    pub cleaning_stats: CleaningStats,
    /// Number of records that reached classification
    pub classified_count: usize,
    pub summary: SummaryTable,
    /// `None` when no records survived cleaning
    pub density: Option<DensityMap>,
}

impl AnalysisOutcome {
    /// True when cleaning excluded every record
    pub fn is_degenerate(&self) -> bool {
        self.classified_count == 0
    }

    /// Borrow the outcome as report assembler input
    pub fn report_input(&self) -> ReportInput<'_> {
        ReportInput {
            source: &self.source,
            summary: &self.summary,
            density: self.density.as_ref(),
            load_stats: &self.load_stats,
            cleaning_stats: &self.cleaning_stats,
        }
    }
}

/// Analysis pipeline over one configured source
#[derive(Debug)]
pub struct IncidentPipeline {
    config: Config,
    progress: Option<ProgressBar>,
}

impl IncidentPipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Report stage transitions on a progress spinner
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn stage(&self, message: &'static str) {
        if let Some(pb) = &self.progress {
            pb.set_message(message);
        }
    }

    /// Load and clean the source without classifying or aggregating
    ///
    /// Only the input settings are checked; report settings matter to [`Self::run`].
    pub fn load_and_clean(&self) -> Result<(LoadStats, CleaningResult)> {
        self.config.validate_input()?;

        self.stage("Loading source...");
        let loader = IncidentLoader::from_config(&self.config.input);
        let loaded = loader.load(&self.config.input.source_path)?;

        self.stage("Cleaning records...");
        let cleaning = apply_cleaning(loaded.dataset.records);

        Ok((loaded.stats, cleaning))
    }

    /// Run every analysis stage; writes nothing
    pub fn analyze(&self) -> Result<AnalysisOutcome> {
        let (load_stats, cleaning) = self.load_and_clean()?;
        let CleaningResult {
            records,
            stats: cleaning_stats,
        } = cleaning;

        self.stage("Classifying by time of day...");
        let classified = classify_records(records);

        self.stage("Aggregating...");
        let summary = build_summary(&classified);

        self.stage("Building density map...");
        let density = match build_density_map(&classified) {
            Ok(map) => Some(map),
            Err(e) if !e.is_fatal() => {
                warn!("{}; hotspot map will be skipped", e);
                None
            }
            Err(e) => return Err(e),
        };

        info!(
            "Analysis complete: {} of {} loaded records analyzed",
            classified.len(),
            load_stats.records_loaded
        );

        Ok(AnalysisOutcome {
            source: self.config.input.source_path.clone(),
            load_stats,
            cleaning_stats,
            classified_count: classified.len(),
            summary,
            density,
        })
    }

    /// Analyze the source and hand the results to a report assembler
    pub fn run(&self, assembler: &dyn ReportAssembler) -> Result<(AnalysisOutcome, ReportArtifacts)> {
        self.config.validate_report()?;
        let outcome = self.analyze()?;

        self.stage("Writing report...");
        let artifacts = assembler.assemble(&outcome.report_input())?;

        Ok((outcome, artifacts))
    }
}
