//! Record cleaning for loaded incident data
//!
//! Turns raw records into analysis-ready [`CleanRecord`](crate::app::models::CleanRecord)s
//! strictly by exclusion. Records are never repaired: a record whose
//! timestamps cannot be parsed, or that lacks a latitude, longitude, weather
//! condition or road condition, is dropped and counted.
//!
//! # Processing Order
//!
//! 1. **Timestamp parsing**: `Start_Time` then `End_Time`
//! 2. **Required fields**: `Start_Lat`, `Start_Lng`, `Weather_Condition`, `Road_Condition`
//!
//! Each excluded record is attributed to the first check it fails. Surviving
//! records keep their source order. Cleaning never fails, even when every
//! record is excluded.

pub mod cleaner;
pub mod stats;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

pub use cleaner::{apply_cleaning, clean_record};
pub use stats::{CleaningResult, CleaningStats, ExclusionReason};
pub use timestamp::parse_timestamp;
