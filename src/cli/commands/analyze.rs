//! Analyze command: full pipeline with report output

use super::shared::{create_spinner, load_configuration, setup_logging};
use crate::app::services::report::{HtmlReportAssembler, ReportArtifacts};
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::pipeline::{AnalysisOutcome, IncidentPipeline};
use colored::*;
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info};

/// Analyze command runner
///
/// 1. Set up logging and configuration
/// 2. Run every analysis stage
/// 3. Write the report artifacts
/// 4. Print a run summary
pub fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let start_time = Instant::now();
    setup_logging(args.get_log_level());

    info!("Starting traffic incident analysis");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let assembler = HtmlReportAssembler::new(config.report.clone());
    let mut pipeline = IncidentPipeline::new(config);
    let spinner = args.show_progress().then(create_spinner);
    if let Some(pb) = &spinner {
        pipeline = pipeline.with_progress(pb.clone());
    }

    let result = pipeline.run(&assembler);
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let (outcome, artifacts) = result?;

    info!("Analysis finished in {:.2}s", start_time.elapsed().as_secs_f64());

    match args.output_format {
        OutputFormat::Human => print_human_summary(&outcome, &artifacts),
        OutputFormat::Json => print_json_summary(&outcome, &artifacts)?,
    }
    Ok(())
}

fn print_human_summary(outcome: &AnalysisOutcome, artifacts: &ReportArtifacts) {
    println!();
    println!("{}", "Traffic Incident Analysis Complete".green().bold());
    println!("{}", "=".repeat(40));
    println!("  Source:            {}", outcome.source.display());
    println!("  Records loaded:    {}", outcome.load_stats.records_loaded);
    println!(
        "  Records analyzed:  {} ({:.1}% retained)",
        outcome.classified_count,
        outcome.cleaning_stats.retention_rate()
    );
    for (reason, count) in outcome.cleaning_stats.exclusions() {
        println!("  Excluded:          {} ({})", count, reason);
    }

    if outcome.is_degenerate() {
        println!(
            "{}",
            "  No records survived cleaning; charts and map were skipped.".yellow()
        );
    } else if let Some(density) = &outcome.density {
        println!(
            "  Map center:        ({:.5}, {:.5})",
            density.center.latitude, density.center.longitude
        );
    }

    println!();
    println!("{}", "Output Files:".bold());
    for path in artifacts.paths() {
        println!("  • {}", path.display());
    }
    println!();
    println!("Open {} to view the report.", artifacts.page.display().to_string().cyan());
}

fn print_json_summary(outcome: &AnalysisOutcome, artifacts: &ReportArtifacts) -> anyhow::Result<()> {
    let summary = json!({
        "source": outcome.source,
        "load": outcome.load_stats,
        "cleaning": outcome.cleaning_stats,
        "records_analyzed": outcome.classified_count,
        "map_center": outcome.density.as_ref().map(|d| d.center),
        "report": artifacts.page,
        "artifacts": artifacts.paths(),
        "map_skipped": artifacts.map_skipped,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
