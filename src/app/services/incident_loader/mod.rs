//! Loader for delimited traffic-incident sources
//!
//! Reads a CSV (or other single-character delimited) file into a
//! [`RawDataset`](crate::app::models::RawDataset) of typed records. Any
//! structural problem is fatal: the loader either returns every data row or
//! an error from the source taxonomy, never a partial dataset.
//!
//! ## Components
//!
//! - [`loader`] - File access, row iteration and error mapping
//! - [`column_mapping`] - Header validation and recognized-column lookup
//! - [`fields`] - Missing-value detection and typed field extraction
//! - [`stats`] - Load statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use traffic_incident_report::app::services::incident_loader::IncidentLoader;
//!
//! # fn example() -> traffic_incident_report::Result<()> {
//! let loader = IncidentLoader::new(b',');
//! let result = loader.load(std::path::Path::new("accidents.csv"))?;
//!
//! println!("Loaded {} records", result.stats.records_loaded);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod fields;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use loader::IncidentLoader;
pub use stats::{LoadResult, LoadStats};
