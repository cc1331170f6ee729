//! Validate command: load and clean a source without analyzing it

use super::shared::{inspect_configuration, setup_logging};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::pipeline::IncidentPipeline;
use colored::*;
use serde_json::json;
use tracing::info;

/// Validate command runner
///
/// Fatal loader errors propagate; exclusions are reported, not treated as
/// failures.
pub fn run_validate(args: InspectArgs) -> anyhow::Result<()> {
    setup_logging(args.get_log_level());
    info!("Validating {}", args.source.display());

    let pipeline = IncidentPipeline::new(inspect_configuration(&args)?);
    let (load_stats, cleaning) = pipeline.load_and_clean()?;

    match args.output_format {
        OutputFormat::Human => {
            println!("{} {}", "Source is valid:".green().bold(), args.source.display());
            println!("  {}", load_stats.summary());
            println!("  {}", cleaning.stats.summary());
            for (reason, count) in cleaning.stats.exclusions() {
                println!("    {:>8}  {}", count, reason);
            }
            if cleaning.is_degenerate() {
                println!(
                    "{}",
                    "  Warning: no records would survive cleaning".yellow()
                );
            }
        }
        OutputFormat::Json => {
            let report = json!({
                "source": args.source,
                "load": load_stats,
                "cleaning": cleaning.stats,
                "degenerate": cleaning.is_degenerate(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
