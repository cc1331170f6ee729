//! Traffic Incident Report Library
//!
//! A Rust library for turning a tabular record of traffic incidents into a
//! descriptive report: condition-based frequency breakdowns and a density
//! map of incident locations, packaged as a browsable HTML page.
//!
//! This library provides tools for:
//! - Loading delimited incident sources with strict structural validation
//! - Cleaning records by exclusion, with per-reason accounting
//! - Classifying incidents into Night/Morning/Afternoon/Evening
//! - Aggregating category frequencies for severity, weather, road and time of day
//! - Building heat-map input with a mean-coordinate center
//! - Assembling SVG charts, a Leaflet heat map and a composed report page

pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod incident_loader;
        pub mod record_cleaner;
        pub mod report;
        pub mod spatial_density;
        pub mod temporal_classifier;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ClassifiedRecord, CleanRecord, Dimension, RawRecord, SummaryTable, TimeOfDay};
pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{AnalysisOutcome, IncidentPipeline};
