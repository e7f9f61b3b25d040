// src/core/driver.rs
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::core::counter::count_fields;
use crate::core::csv_events::{CsvEvent, CsvEvents};
use crate::models::{FileTally, FrequencyTable, Summary};
use crate::utils::{print_header, print_record_count, print_tally};

/// Name that stands for standard input, both on the command line and in reports.
pub const STDIN_NAME: &str = "-";

/// How records and fields are recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// One record per line, fields split on a raw byte sequence.
    Plain { delimiter: Vec<u8> },
    /// Quote-aware CSV rows.
    Csv { delimiter: u8, quote: u8 },
}

impl Default for Mode {
    fn default() -> Self {
        Self::Plain {
            delimiter: vec![b'\t'],
        }
    }
}

/// Resolved options for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub header: bool,
    pub line_count: bool,
    pub quiet: bool,
}

/// The inputs to process: the named files, or standard input when none are given.
#[must_use]
pub fn inputs_or_stdin(files: &[String]) -> Vec<String> {
    if files.is_empty() {
        vec![STDIN_NAME.to_owned()]
    } else {
        files.to_vec()
    }
}

/// Opens `name` for buffered reading; `-` binds to standard input.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_source(name: &str) -> Result<Box<dyn BufRead>> {
    if name == STDIN_NAME {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file =
        File::open(Path::new(name)).with_context(|| format!("Error opening file: {name}"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Builds the frequency table for one input stream.
///
/// # Arguments
///
/// * `source` - The stream to read until end of input
/// * `mode` - Plain delimiter or CSV tokenization
///
/// # Returns
///
/// * `Ok((FrequencyTable, u64))` - The table and the number of records read
///
/// # Errors
///
/// This function may return an error if:
/// * Reading from `source` fails
/// * The CSV tokenizer rejects the stream
pub fn tally_reader<R: BufRead>(source: R, mode: &Mode) -> Result<(FrequencyTable, u64)> {
    match mode {
        Mode::Plain { delimiter } => tally_lines(source, delimiter),
        Mode::Csv { delimiter, quote } => {
            tally_events(CsvEvents::new(source, *delimiter, *quote))
        }
    }
}

fn tally_lines<R: BufRead>(mut source: R, delimiter: &[u8]) -> Result<(FrequencyTable, u64)> {
    let mut table = FrequencyTable::new();
    let mut records: u64 = 0;
    let mut line = Vec::new();

    while let Some(record) = next_line(&mut source, &mut line)? {
        table.push(count_fields(record, delimiter));
        records = records.saturating_add(1);
    }

    Ok((table, records))
}

/// Folds tokenizer events into a table. The running field count lives here,
/// scoped to this one stream.
///
/// # Errors
///
/// Returns the first tokenizer error; nothing is kept from the failing stream.
pub fn tally_events<I>(events: I) -> Result<(FrequencyTable, u64)>
where
    I: IntoIterator<Item = Result<CsvEvent, csv::Error>>,
{
    let mut table = FrequencyTable::new();
    let mut records: u64 = 0;
    let mut fields: usize = 0;

    for event in events {
        match event.context("Error while parsing CSV input")? {
            CsvEvent::Field => fields = fields.saturating_add(1),
            CsvEvent::Record => {
                table.push(fields);
                records = records.saturating_add(1);
                fields = 0;
            }
        }
    }

    // A field left open at end of input still closes one record.
    if fields > 0 {
        table.push(fields);
        records = records.saturating_add(1);
    }

    Ok((table, records))
}

/// Counts records without building a table.
///
/// # Errors
///
/// Returns an error if reading fails or the CSV tokenizer rejects the stream.
pub fn count_records<R: BufRead>(mut source: R, mode: &Mode) -> Result<u64> {
    let mut records: u64 = 0;
    match mode {
        Mode::Plain { .. } => {
            let mut line = Vec::new();
            while next_line(&mut source, &mut line)?.is_some() {
                records = records.saturating_add(1);
            }
        }
        Mode::Csv { delimiter, quote } => {
            for event in CsvEvents::new(source, *delimiter, *quote) {
                if event.context("Error while parsing CSV input")? == CsvEvent::Record {
                    records = records.saturating_add(1);
                }
            }
        }
    }
    Ok(records)
}

/// Opens `name`, reads it to the end and returns its tally.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened
/// * Reading or tokenizing the file fails
pub fn process_file(name: &str, mode: &Mode) -> Result<FileTally> {
    debug!(file = name, "opening input");
    tally_source(name, open_source(name)?, mode)
}

/// Reads an already opened input to the end and returns its tally under `name`.
///
/// # Errors
///
/// Returns an error if reading or tokenizing the input fails.
pub fn tally_source<R: BufRead>(name: &str, source: R, mode: &Mode) -> Result<FileTally> {
    let (table, records) = tally_reader(source, mode).with_context(|| match mode {
        Mode::Plain { .. } => format!("Error counting file: {name}"),
        Mode::Csv { .. } => format!("Error counting CSV file: {name}"),
    })?;
    info!(
        file = name,
        records,
        field_counts = table.count(),
        "finished input"
    );
    Ok(FileTally::new(name.to_owned(), table, records))
}

fn count_source<R: BufRead>(name: &str, source: R, mode: &Mode) -> Result<u64> {
    let records =
        count_records(source, mode).with_context(|| format!("Error counting file: {name}"))?;
    info!(file = name, records, "finished input");
    Ok(records)
}

/// Processes every input in order and writes the per-file reports to `out`.
///
/// Each input gets a fresh table that is dropped once its report is written.
/// The first failing input stops the whole run; inputs after it are not read.
///
/// # Arguments
///
/// * `settings` - Mode and reporting options
/// * `files` - Input names; empty means standard input
/// * `out` - Destination for reports
///
/// # Returns
///
/// * `Ok(Summary)` - Number of inputs processed and whether any was inconsistent
///
/// # Errors
///
/// This function may return an error if:
/// * An input cannot be opened or read
/// * The CSV tokenizer rejects an input
/// * Writing a report fails
pub fn run_inputs<W: Write>(settings: &Settings, files: &[String], out: &mut W) -> Result<Summary> {
    run_inputs_with(settings, files, out, open_source)
}

/// Same as [`run_inputs`], with `open` deciding how each input name is opened.
///
/// # Errors
///
/// Returns the first error from `open`, from reading an input, or from writing.
pub fn run_inputs_with<W, F>(
    settings: &Settings,
    files: &[String],
    out: &mut W,
    mut open: F,
) -> Result<Summary>
where
    W: Write,
    F: FnMut(&str) -> Result<Box<dyn BufRead>>,
{
    if settings.header && !settings.quiet {
        print_header(out, settings.line_count)?;
    }

    let mut summary = Summary::new();
    for name in inputs_or_stdin(files) {
        if settings.line_count {
            debug!(file = %name, "opening input for record count");
            let records = count_source(&name, open(&name)?, &settings.mode)?;
            summary.record_file(false);
            if !settings.quiet {
                print_record_count(out, records, &name)?;
            }
            continue;
        }

        debug!(file = %name, "opening input");
        let tally = tally_source(&name, open(&name)?, &settings.mode)?;
        let inconsistent = tally.is_inconsistent();
        if inconsistent && !summary.inconsistent {
            info!(
                file = %tally.name,
                field_counts = tally.table.count(),
                "inconsistent field counts"
            );
        }
        summary.record_file(inconsistent);
        if !settings.quiet {
            print_tally(out, &tally)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(summary)
}

/// Reads the next line into `buf` and returns it without its terminator,
/// or `None` at end of input. A last line with no newline still counts.
fn next_line<'a, R: BufRead>(source: &mut R, buf: &'a mut Vec<u8>) -> io::Result<Option<&'a [u8]>> {
    buf.clear();
    if source.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let mut line = buf.as_slice();
    if let Some(stripped) = line.strip_suffix(b"\n") {
        line = stripped.strip_suffix(b"\r").unwrap_or(stripped);
    }
    Ok(Some(line))
}
