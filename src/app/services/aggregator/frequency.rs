//! Per-dimension category counting

use crate::app::models::{CategoryCount, ClassifiedRecord, Dimension, FrequencyTable};
use std::collections::HashMap;

/// Count category occurrences along one dimension
///
/// Categories are first collected in encounter order, then stably sorted by
/// descending count so ties keep that order.
pub fn count_dimension(records: &[ClassifiedRecord], dimension: Dimension) -> FrequencyTable {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CategoryCount> = Vec::new();

    for record in records {
        let category = record.category(dimension);
        match positions.get(category) {
            Some(&index) => entries[index].count += 1,
            None => {
                positions.insert(category, entries.len());
                entries.push(CategoryCount {
                    category: category.to_string(),
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));

    FrequencyTable { dimension, entries }
}
