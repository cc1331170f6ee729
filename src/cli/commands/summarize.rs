//! Summarize command: print frequency tables without writing files

use super::shared::{inspect_configuration, setup_logging};
use crate::app::services::aggregator::render_summary;
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::pipeline::IncidentPipeline;

pub fn run_summarize(args: InspectArgs) -> anyhow::Result<()> {
    setup_logging(args.get_log_level());

    let outcome = IncidentPipeline::new(inspect_configuration(&args)?).analyze()?;

    match args.output_format {
        OutputFormat::Human => print!("{}", render_summary(&outcome.summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome.summary)?),
    }
    Ok(())
}
