//! Command-line argument definitions for the traffic report tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::Dimension;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the traffic incident report tool
///
/// Analyzes a delimited file of traffic incidents and writes a browsable
/// report with condition charts and a hotspot map.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "traffic-report",
    version,
    about = "Analyze traffic incident records and build an HTML report",
    long_about = "Loads a CSV of traffic incidents, drops incomplete records, classifies each \
                  incident by time of day, counts incidents per severity, weather, road condition \
                  and time of day, and writes SVG bar charts, a heat map of incident locations and \
                  a composed HTML page."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full analysis and write the report
    Analyze(AnalyzeArgs),
    /// Load and clean a source, reporting what would be excluded
    Validate(InspectArgs),
    /// Print the summary tables without writing any files
    Summarize(InspectArgs),
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Delimited incident file to analyze
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory receiving the report
    ///
    /// Created if it does not exist. Existing artifacts are overwritten.
    /// Defaults to ./report
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory receiving the report"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON configuration file for report settings. If not specified,
    /// looks for ~/.config/traffic-report/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Field delimiter; tab is inferred for .tsv sources
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Initial zoom level of the hotspot map (0-18)
    #[arg(long = "zoom", value_name = "LEVEL")]
    pub zoom: Option<u8>,

    /// Dimensions to chart (comma-separated list)
    #[arg(
        long = "charts",
        value_name = "LIST",
        help = "Comma-separated dimensions to chart",
        long_help = "Dimensions rendered as bar charts, in page order.\n\
                     Available: severity, weather_condition, road_condition, time_of_day\n\n\
                     If not specified, charts weather_condition, road_condition, time_of_day"
    )]
    pub charts: Option<DimensionList>,

    /// Skip writing summary.json
    #[arg(long = "no-json")]
    pub no_json: bool,

    /// Hide the progress spinner
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the validate and summarize commands
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Delimited incident file to inspect
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Field delimiter; tab is inferred for .tsv sources
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated dimension lists
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionList {
    pub dimensions: Vec<Dimension>,
}

impl FromStr for DimensionList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let dimensions = s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Dimension::from_str)
            .collect::<Result<Vec<_>>>()?;

        if dimensions.is_empty() {
            return Err(Error::configuration("Dimension list cannot be empty"));
        }

        Ok(DimensionList { dimensions })
    }
}

/// Map verbosity flags to a tracing level
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl AnalyzeArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Show the spinner only for interactive human output
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress && self.output_format == OutputFormat::Human
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }
}

impl InspectArgs {
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}
