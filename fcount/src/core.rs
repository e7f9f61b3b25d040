// src/core.rs
pub mod counter;
pub mod csv_events;
pub mod driver;
pub mod ranker;
