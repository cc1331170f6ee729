//! Report assembler trait and the HTML/SVG implementation

use super::chart::{chart_file_name, render_bar_chart};
use super::density_map::render_density_map;
use super::page::{PageLinks, render_page};
use super::writer::{ReportSummary, remove_stale_artifact, write_artifact};
use crate::app::models::{DensityMap, Dimension, SummaryTable};
use crate::app::services::incident_loader::LoadStats;
use crate::app::services::record_cleaner::CleaningStats;
use crate::config::ReportConfig;
use crate::constants::artifacts;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything a report is built from
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub source: &'a Path,
    pub summary: &'a SummaryTable,
    /// `None` when the density builder reported degenerate input
    pub density: Option<&'a DensityMap>,
    pub load_stats: &'a LoadStats,
    pub cleaning_stats: &'a CleaningStats,
}

/// Paths of every artifact written for one report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportArtifacts {
    pub page: PathBuf,
    pub charts: Vec<PathBuf>,
    pub map: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
    /// True when map generation was skipped for lack of points
    pub map_skipped: bool,
}

impl ReportArtifacts {
    /// All written paths, page last
    pub fn paths(&self) -> Vec<&Path> {
        self.charts
            .iter()
            .chain(self.map.iter())
            .chain(self.summary_json.iter())
            .chain(std::iter::once(&self.page))
            .map(PathBuf::as_path)
            .collect()
    }
}

/// Sink that turns analysis results into a browsable report
pub trait ReportAssembler {
    fn assemble(&self, input: &ReportInput<'_>) -> Result<ReportArtifacts>;
}

/// Writes SVG charts, a Leaflet heat map, a composed HTML page and a JSON summary
#[derive(Debug, Clone)]
pub struct HtmlReportAssembler {
    config: ReportConfig,
}

impl HtmlReportAssembler {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    fn ensure_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|e| {
            Error::output(dir, format!("cannot create output directory: {}", e))
        })
    }
}

impl ReportAssembler for HtmlReportAssembler {
    fn assemble(&self, input: &ReportInput<'_>) -> Result<ReportArtifacts> {
        self.ensure_output_dir()?;
        let output_dir = self.config.output_dir.as_path();
        let mut written = ReportArtifacts::default();

        let mut chart_links = Vec::new();
        for &dimension in &self.config.charted_dimensions {
            let Some(table) = input.summary.table(dimension) else {
                continue;
            };
            match render_bar_chart(table) {
                Some(svg) => {
                    let file_name = chart_file_name(dimension);
                    written
                        .charts
                        .push(write_artifact(output_dir, file_name, &svg)?);
                    chart_links.push((dimension, file_name));
                }
                None => info!("Skipping chart for {}: no categories", dimension),
            }
        }

        // Charts not produced by this run must not linger from an earlier one
        for dimension in Dimension::ALL {
            if !chart_links.iter().any(|(charted, _)| *charted == dimension) {
                remove_stale_artifact(output_dir, chart_file_name(dimension))?;
            }
        }

        match input.density {
            Some(map) => {
                let html = render_density_map(map, &self.config)?;
                written.map = Some(write_artifact(output_dir, artifacts::HOTSPOT_MAP, &html)?);
            }
            None => {
                warn!("Skipping hotspot map: no locations to plot");
                written.map_skipped = true;
                remove_stale_artifact(output_dir, artifacts::HOTSPOT_MAP)?;
            }
        }

        let links = PageLinks {
            charts: chart_links,
            map: written.map.as_ref().map(|_| artifacts::HOTSPOT_MAP),
        };
        let page = render_page(input, &self.config.page_title, &links);
        written.page = write_artifact(output_dir, artifacts::REPORT_PAGE, &page)?;

        if self.config.write_summary_json {
            let json = ReportSummary::from_input(input).to_json()?;
            written.summary_json = Some(write_artifact(output_dir, artifacts::SUMMARY_JSON, &json)?);
        } else {
            remove_stale_artifact(output_dir, artifacts::SUMMARY_JSON)?;
        }

        info!(
            "Report written to {} ({} artifacts)",
            written.page.display(),
            written.paths().len()
        );
        Ok(written)
    }
}
