// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, resolve_settings, run, run_with_config, run_with_writer};
pub use config::{Config, load_config, parse_config, read_config};
pub use crate::core::counter::{count_fields, occurrences, split_fields};
pub use crate::core::csv_events::{CsvEvent, CsvEvents};
pub use crate::core::driver::{
    Mode, STDIN_NAME, Settings, count_records, inputs_or_stdin, open_source, process_file,
    run_inputs, run_inputs_with, tally_events, tally_reader, tally_source,
};
pub use crate::core::ranker::rank;
pub use models::{EXIT_INCONSISTENT, FieldCountEntry, FileTally, FrequencyTable, Summary};
