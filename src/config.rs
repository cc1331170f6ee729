//! Configuration management and validation.
//!
//! The pipeline never prompts for its inputs: the caller injects a [`Config`]
//! naming the source file and the report destination. Configuration is
//! layered as defaults, then an optional JSON file, then CLI overrides.

use crate::app::models::Dimension;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DELIMITER, DEFAULT_HEAT_BLUR, DEFAULT_HEAT_RADIUS,
    DEFAULT_MAP_ZOOM, DEFAULT_PAGE_TITLE, MAX_MAP_ZOOM,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Delimited tabular file to analyze
    pub source_path: PathBuf,

    /// Field delimiter; `None` infers tab for `.tsv` sources and comma otherwise
    pub delimiter: Option<char>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            delimiter: None,
        }
    }
}

impl InputConfig {
    /// Delimiter byte to hand to the CSV reader
    pub fn delimiter_byte(&self) -> u8 {
        match self.delimiter {
            Some(delimiter) => delimiter as u8,
            None => {
                let is_tsv = self
                    .source_path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
                if is_tsv { b'\t' } else { DEFAULT_DELIMITER }
            }
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory receiving charts, map, page and summary
    pub output_dir: PathBuf,

    /// Dimensions rendered as bar charts, in page order
    pub charted_dimensions: Vec<Dimension>,

    /// Initial zoom level of the hotspot map
    pub map_zoom: u8,

    /// Heat layer point radius in pixels
    pub heat_radius: u32,

    /// Heat layer blur in pixels
    pub heat_blur: u32,

    /// Write summary.json next to the page
    pub write_summary_json: bool,

    /// Title of the composed page
    pub page_title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("report"),
            charted_dimensions: vec![
                Dimension::WeatherCondition,
                Dimension::RoadCondition,
                Dimension::TimeOfDay,
            ],
            map_zoom: DEFAULT_MAP_ZOOM,
            heat_radius: DEFAULT_HEAT_RADIUS,
            heat_blur: DEFAULT_HEAT_BLUR,
            write_summary_json: true,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub report: ReportConfig,
}

impl Config {
    /// Create configuration for a source and output directory with defaults elsewhere
    pub fn new(source_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.input.source_path = source_path.into();
        config.report.output_dir = output_dir.into();
        config
    }

    /// Per-user configuration file location, e.g. `~/.config/traffic-report/config.json`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.input.delimiter = Some(delimiter);
        self
    }

    /// Set the report output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.report.output_dir = output_dir.into();
        self
    }

    /// Set the hotspot map zoom level
    pub fn with_map_zoom(mut self, zoom: u8) -> Self {
        self.report.map_zoom = zoom;
        self
    }

    /// Set which dimensions get bar charts
    pub fn with_charted_dimensions(mut self, dimensions: Vec<Dimension>) -> Self {
        self.report.charted_dimensions = dimensions;
        self
    }

    /// Disable the summary.json artifact
    pub fn without_summary_json(mut self) -> Self {
        self.report.write_summary_json = false;
        self
    }

    /// Validate the configuration before any stage runs
    pub fn validate(&self) -> Result<()> {
        self.validate_input()?;
        self.validate_report()
    }

    /// Check only the settings needed to read the source
    pub fn validate_input(&self) -> Result<()> {
        if self.input.source_path.as_os_str().is_empty() {
            return Err(Error::configuration("Source path must be provided"));
        }

        if let Some(delimiter) = self.input.delimiter {
            if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
                return Err(Error::configuration(format!(
                    "Invalid delimiter {:?}: must be a single ASCII character other than a quote or newline",
                    delimiter
                )));
            }
        }

        Ok(())
    }

    /// Check only the settings that shape the written report
    pub fn validate_report(&self) -> Result<()> {
        if self.report.output_dir.exists() && !self.report.output_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Output path '{}' exists and is not a directory",
                self.report.output_dir.display()
            )));
        }

        if self.report.map_zoom > MAX_MAP_ZOOM {
            return Err(Error::configuration(format!(
                "Map zoom {} out of range (0-{})",
                self.report.map_zoom, MAX_MAP_ZOOM
            )));
        }

        if self.report.heat_radius == 0 {
            return Err(Error::configuration("Heat radius must be greater than zero"));
        }

        Ok(())
    }
}
