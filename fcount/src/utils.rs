// src/utils.rs
use crate::core::ranker::rank;
use crate::models::FileTally;
use std::io::{self, Write};

pub const FIELD_COUNT_HEADER: &str = "field_count\trecords\tfile";
pub const LINE_COUNT_HEADER: &str = "records\tfile";

pub fn print_header<W: Write>(out: &mut W, line_count: bool) -> io::Result<()> {
    let header = if line_count {
        LINE_COUNT_HEADER
    } else {
        FIELD_COUNT_HEADER
    };
    writeln!(out, "{header}")
}

/// Writes one `field_count<TAB>records<TAB>file` line per entry, most common first.
pub fn print_tally<W: Write>(out: &mut W, tally: &FileTally) -> io::Result<()> {
    for entry in rank(&tally.table) {
        writeln!(
            out,
            "{}\t{}\t{}",
            entry.field_count, entry.record_count, tally.name
        )?;
    }
    Ok(())
}

pub fn print_record_count<W: Write>(out: &mut W, records: u64, name: &str) -> io::Result<()> {
    writeln!(out, "{records}\t{name}")
}
