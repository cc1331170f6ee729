//! Time-of-day classification of clean incident records

use crate::app::models::{CleanRecord, ClassifiedRecord, TimeOfDay};
use tracing::info;

/// Attach the time-of-day label derived from the record's start hour
pub fn classify_record(record: CleanRecord) -> ClassifiedRecord {
    let time_of_day = TimeOfDay::from_datetime(&record.start_time);
    ClassifiedRecord {
        record,
        time_of_day,
    }
}

/// Classify every record, preserving order and length
pub fn classify_records(records: Vec<CleanRecord>) -> Vec<ClassifiedRecord> {
    let classified: Vec<ClassifiedRecord> = records.into_iter().map(classify_record).collect();
    info!("Classified {} records by time of day", classified.len());
    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::PassthroughFields;
    use chrono::NaiveDate;

    fn clean_record_at(line: u64, hour: u32, minute: u32) -> CleanRecord {
        let start_time = NaiveDate::from_ymd_opt(2021, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        CleanRecord {
            line,
            start_time,
            end_time: start_time,
            start_lat: 34.05,
            start_lng: -118.25,
            weather_condition: "Rain".to_string(),
            road_condition: "Wet".to_string(),
            severity: None,
            extra: PassthroughFields::empty(),
        }
    }

    #[test]
    fn test_classify_record_uses_start_hour() {
        assert_eq!(classify_record(clean_record_at(2, 5, 59)).time_of_day, TimeOfDay::Night);
        assert_eq!(classify_record(clean_record_at(2, 6, 0)).time_of_day, TimeOfDay::Morning);
        assert_eq!(
            classify_record(clean_record_at(2, 17, 59)).time_of_day,
            TimeOfDay::Afternoon
        );
        assert_eq!(classify_record(clean_record_at(2, 23, 59)).time_of_day, TimeOfDay::Evening);
    }

    #[test]
    fn test_end_time_is_ignored() {
        let mut record = clean_record_at(2, 3, 0);
        record.end_time = record.end_time + chrono::Duration::hours(10);
        assert_eq!(classify_record(record).time_of_day, TimeOfDay::Night);
    }

    #[test]
    fn test_classify_records_preserves_order() {
        let records = vec![
            clean_record_at(2, 20, 0),
            clean_record_at(3, 2, 0),
            clean_record_at(4, 14, 0),
        ];
        let classified = classify_records(records.clone());

        assert_eq!(classified.len(), 3);
        assert_eq!(
            classified.iter().map(|c| c.time_of_day).collect::<Vec<_>>(),
            vec![TimeOfDay::Evening, TimeOfDay::Night, TimeOfDay::Afternoon]
        );
        for (classified, original) in classified.iter().zip(&records) {
            assert_eq!(&classified.record, original);
        }
    }

    #[test]
    fn test_classify_records_empty() {
        assert!(classify_records(Vec::new()).is_empty());
    }
}
