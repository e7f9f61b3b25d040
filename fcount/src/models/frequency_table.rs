// src/models/frequency_table.rs
use crate::models::FieldCountEntry;

/// Tally of field counts seen in a single file.
///
/// Entries are kept in first-seen order and scanned linearly on every push.
/// A well-formed file produces exactly one entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FieldCountEntry>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records one more record having `field_count` fields.
    ///
    /// Bumps the matching entry when one exists, otherwise appends a new entry
    /// with a record count of one. Field counts are unique within the table, so
    /// the scan stops at the first match.
    #[inline]
    pub fn push(&mut self, field_count: usize) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.field_count == field_count)
        {
            entry.record_count = entry.record_count.saturating_add(1);
            return;
        }
        self.entries.push(FieldCountEntry::new(field_count));
    }

    /// Number of distinct field counts observed.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A file is inconsistent when its records disagree on the field count.
    #[inline]
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        self.count() > 1
    }

    /// Entries in insertion order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[FieldCountEntry] {
        &self.entries
    }

    /// Total records folded into the table.
    #[inline]
    #[must_use]
    pub fn total_records(&self) -> u64 {
        self.entries
            .iter()
            .fold(0_u64, |acc, entry| acc.saturating_add(entry.record_count))
    }
}
