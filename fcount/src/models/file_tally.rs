// src/models/file_tally.rs
use crate::models::FrequencyTable;

/// Everything learned from one input once it has been read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTally {
    /// Display name, `-` for standard input.
    pub name: String,
    pub table: FrequencyTable,
    pub records: u64,
}

impl FileTally {
    #[inline]
    #[must_use]
    pub const fn new(name: String, table: FrequencyTable, records: u64) -> Self {
        Self {
            name,
            table,
            records,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        self.table.is_inconsistent()
    }
}
