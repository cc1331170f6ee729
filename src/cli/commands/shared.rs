//! Shared components for CLI commands

use crate::cli::args::{AnalyzeArgs, InspectArgs};
use crate::config::Config;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("traffic_incident_report={}", log_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration: defaults, then a JSON file, then CLI overrides
pub fn load_configuration(args: &AnalyzeArgs) -> anyhow::Result<Config> {
    info!("Loading configuration");

    let mut config = read_config_file(args.config_file.as_ref())?;
    apply_cli_overrides(&mut config, args);

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Read `--config`, else the default config file if present, else defaults
fn read_config_file(config_file: Option<&PathBuf>) -> anyhow::Result<Config> {
    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok().filter(|path| path.exists())
    } else {
        None
    };

    match config_file.or(default_config_path.as_ref()) {
        Some(path) => {
            info!("Using config file: {}", path.display());
            Config::from_file(path)
                .with_context(|| format!("Loading configuration from {}", path.display()))
        }
        None => {
            info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Apply command-line overrides on top of file/default configuration
pub fn apply_cli_overrides(config: &mut Config, args: &AnalyzeArgs) {
    config.input.source_path = args.source.clone();
    if let Some(delimiter) = args.delimiter {
        config.input.delimiter = Some(delimiter);
    }
    if let Some(output_dir) = &args.output_dir {
        config.report.output_dir = output_dir.clone();
    }
    if let Some(zoom) = args.zoom {
        config.report.map_zoom = zoom;
    }
    if let Some(charts) = &args.charts {
        config.report.charted_dimensions = charts.dimensions.clone();
    }
    if args.no_json {
        config.report.write_summary_json = false;
    }
}

/// Configuration for the inspection commands, which never write files
///
/// Same layering as `analyze`, but only the input settings are validated.
pub fn inspect_configuration(args: &InspectArgs) -> anyhow::Result<Config> {
    let mut config = read_config_file(args.config_file.as_ref())?;
    config.input.source_path = args.source.clone();
    if let Some(delimiter) = args.delimiter {
        config.input.delimiter = Some(delimiter);
    }

    config.validate_input().context("Invalid configuration")?;
    Ok(config)
}

/// Create a stage spinner
pub fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
