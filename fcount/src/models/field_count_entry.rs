// src/models/field_count_entry.rs

/// Number of records in one file that share the same field count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCountEntry {
    pub field_count: usize,
    pub record_count: u64,
}

impl FieldCountEntry {
    #[inline]
    #[must_use]
    pub const fn new(field_count: usize) -> Self {
        Self {
            field_count,
            record_count: 1,
        }
    }
}
