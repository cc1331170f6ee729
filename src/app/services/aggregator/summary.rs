//! Summary table construction and plain-text rendering

use super::frequency::count_dimension;
use crate::app::models::{ClassifiedRecord, Dimension, SummaryTable};
use std::fmt::Write;
use tracing::{debug, info};

/// Build frequency tables for every dimension
///
/// Zero records yield an empty table per dimension rather than an error.
pub fn build_summary(records: &[ClassifiedRecord]) -> SummaryTable {
    if records.is_empty() {
        info!("No records to aggregate; returning empty summary");
        return SummaryTable::empty();
    }

    let tables = Dimension::ALL
        .iter()
        .map(|&dimension| {
            let table = count_dimension(records, dimension);
            debug!(
                "{}: {} categories over {} records",
                dimension,
                table.unique(),
                table.total()
            );
            table
        })
        .collect();

    info!("Aggregated {} records across {} dimensions", records.len(), Dimension::ALL.len());

    SummaryTable {
        record_count: records.len(),
        tables,
    }
}

/// Render a summary as aligned text: a describe table followed by each
/// dimension's category counts
pub fn render_summary(summary: &SummaryTable) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Records analyzed: {}", summary.record_count);
    if summary.is_empty() {
        let _ = writeln!(out, "No records survived cleaning.");
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<20} {:>8} {:>8}  {:<24} {:>8}",
        "dimension", "count", "unique", "top", "freq"
    );
    for description in summary.describe() {
        let _ = writeln!(
            out,
            "{:<20} {:>8} {:>8}  {:<24} {:>8}",
            description.dimension.label(),
            description.count,
            description.unique,
            description.top.as_deref().unwrap_or("-"),
            description
                .freq
                .map(|f| f.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }

    for table in &summary.tables {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", table.dimension.label());
        let width = table
            .entries
            .iter()
            .map(|e| e.category.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &table.entries {
            let _ = writeln!(out, "  {:<width$}  {}", entry.category, entry.count, width = width);
        }
    }

    out
}
