//! Frequency aggregation over condition dimensions
//!
//! Reduces classified records into one [`FrequencyTable`](crate::app::models::FrequencyTable)
//! per dimension. Each dimension is counted independently with its own local
//! accumulator; the tables are merged into a
//! [`SummaryTable`](crate::app::models::SummaryTable) at the end.
//!
//! Tables are sorted by descending count. Categories with equal counts keep
//! the order in which they first appeared in the input, so the same input
//! always produces the same table.

pub mod frequency;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use frequency::count_dimension;
pub use summary::{build_summary, render_summary};
