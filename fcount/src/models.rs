// src/models.rs
pub mod field_count_entry;
pub mod file_tally;
pub mod frequency_table;
pub mod summary;

pub use field_count_entry::FieldCountEntry;
pub use file_tally::FileTally;
pub use frequency_table::FrequencyTable;
pub use summary::{EXIT_INCONSISTENT, Summary};
