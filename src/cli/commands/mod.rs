//! Command implementations for the traffic report CLI
//!
//! Each command is implemented in its own module:
//! - `analyze`: full pipeline with report output
//! - `validate`: load and clean only, with exclusion statistics
//! - `summarize`: summary tables on stdout, no files written

pub mod analyze;
pub mod shared;
pub mod summarize;
pub mod validate;

use crate::cli::args::Commands;

/// Dispatch to the handler for a subcommand
pub fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => analyze::run_analyze(args),
        Commands::Validate(args) => validate::run_validate(args),
        Commands::Summarize(args) => summarize::run_summarize(args),
    }
}
