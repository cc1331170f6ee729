//! Exclusion-only cleaning of raw incident records

use super::stats::{CleaningResult, CleaningStats, ExclusionReason};
use super::timestamp::parse_timestamp;
use crate::app::models::{CleanRecord, RawRecord};
use tracing::{debug, info, warn};

/// Clean every raw record, keeping survivors in order
///
/// Exclusion is silent filtering: nothing here fails, and an empty result is
/// a valid outcome for downstream stages to handle.
pub fn apply_cleaning(records: Vec<RawRecord>) -> CleaningResult {
    let mut stats = CleaningStats {
        total_input: records.len(),
        ..CleaningStats::new()
    };
    let mut cleaned = Vec::with_capacity(records.len());

    for raw in records {
        let line = raw.line;
        match clean_record(raw) {
            Ok(record) => cleaned.push(record),
            Err(reason) => {
                debug!("Excluded record at line {}: {}", line, reason);
                stats.record_exclusion(reason);
            }
        }
    }

    stats.retained = cleaned.len();
    info!("{}", stats.summary());
    for (reason, count) in stats.exclusions() {
        info!("  {} records excluded: {}", count, reason);
    }

    if cleaned.is_empty() {
        warn!("No records survived cleaning");
    }

    CleaningResult {
        records: cleaned,
        stats,
    }
}

/// Clean a single record or report the first check it fails
pub fn clean_record(raw: RawRecord) -> Result<CleanRecord, ExclusionReason> {
    let start_time = raw
        .start_time
        .as_deref()
        .and_then(parse_timestamp)
        .ok_or(ExclusionReason::InvalidStartTime)?;
    let end_time = raw
        .end_time
        .as_deref()
        .and_then(parse_timestamp)
        .ok_or(ExclusionReason::InvalidEndTime)?;

    let start_lat = raw.start_lat.ok_or(ExclusionReason::MissingLatitude)?;
    let start_lng = raw.start_lng.ok_or(ExclusionReason::MissingLongitude)?;
    let weather_condition = raw
        .weather_condition
        .ok_or(ExclusionReason::MissingWeatherCondition)?;
    let road_condition = raw
        .road_condition
        .ok_or(ExclusionReason::MissingRoadCondition)?;

    Ok(CleanRecord {
        line: raw.line,
        start_time,
        end_time,
        start_lat,
        start_lng,
        weather_condition,
        road_condition,
        severity: raw.severity,
        extra: raw.extra,
    })
}
