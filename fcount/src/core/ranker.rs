// src/core/ranker.rs
use crate::models::{FieldCountEntry, FrequencyTable};

/// Orders a table's entries by descending record count for reporting.
///
/// The sort is stable, so entries with the same record count stay in the order
/// their field counts were first seen. The table itself is left untouched.
#[inline]
#[must_use]
pub fn rank(table: &FrequencyTable) -> Vec<FieldCountEntry> {
    let mut ranked = table.entries().to_vec();
    ranked.sort_by(|a, b| b.record_count.cmp(&a.record_count));
    ranked
}
