//! Tests for report assembly

pub mod assembler_tests;
pub mod chart_tests;

use crate::app::models::{
    BoundingBox, CategoryCount, DensityMap, Dimension, FrequencyTable, GeoPoint, SummaryTable,
};
use crate::app::services::incident_loader::LoadStats;
use crate::app::services::record_cleaner::CleaningStats;

/// Build a frequency table from (category, count) pairs
pub fn create_table(dimension: Dimension, entries: &[(&str, usize)]) -> FrequencyTable {
    FrequencyTable {
        dimension,
        entries: entries
            .iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count: *count,
            })
            .collect(),
    }
}

/// Summary over three records
pub fn create_summary() -> SummaryTable {
    SummaryTable {
        record_count: 3,
        tables: vec![
            create_table(Dimension::Severity, &[("2", 2), ("3", 1)]),
            create_table(Dimension::WeatherCondition, &[("Rain", 2), ("Light <Snow>", 1)]),
            create_table(Dimension::RoadCondition, &[("Wet", 3)]),
            create_table(
                Dimension::TimeOfDay,
                &[("Morning", 1), ("Afternoon", 1), ("Evening", 1)],
            ),
        ],
    }
}

pub fn create_density_map() -> DensityMap {
    DensityMap {
        points: vec![
            GeoPoint { latitude: 40.0, longitude: -75.0 },
            GeoPoint { latitude: 42.0, longitude: -73.0 },
        ],
        center: GeoPoint { latitude: 41.0, longitude: -74.0 },
        bounds: BoundingBox {
            min_latitude: 40.0,
            max_latitude: 42.0,
            min_longitude: -75.0,
            max_longitude: -73.0,
        },
    }
}

pub fn create_load_stats(records: usize) -> LoadStats {
    LoadStats {
        rows_read: records,
        records_loaded: records,
        ..LoadStats::new()
    }
}

pub fn create_cleaning_stats(input: usize, retained: usize) -> CleaningStats {
    CleaningStats {
        total_input: input,
        retained,
        missing_road_condition: input - retained,
        ..CleaningStats::new()
    }
}
