//! Report assembly for analysis results
//!
//! The pipeline hands its terminal artifacts to a [`ReportAssembler`]. The
//! shipped implementation, [`HtmlReportAssembler`], renders one SVG bar chart
//! per charted dimension, a Leaflet heat map of incident locations, a
//! composed HTML page linking both, and an optional `summary.json`.
//!
//! ## Components
//!
//! - [`assembler`] - Trait, input/output types and the HTML implementation
//! - [`chart`] - SVG bar charts in frequency-table order
//! - [`density_map`] - Heat map document centered on the density center
//! - [`page`] - Composed report page
//! - [`writer`] - Artifact file writing and the JSON summary

pub mod assembler;
pub mod chart;
pub mod density_map;
pub mod markup;
pub mod page;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use assembler::{HtmlReportAssembler, ReportArtifacts, ReportAssembler, ReportInput};
pub use writer::ReportSummary;
