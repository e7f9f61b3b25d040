// src/core/csv_events.rs
use csv::{ByteRecord, Reader, ReaderBuilder};
use std::io::Read;

/// Boundary reported by the CSV tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvEvent {
    /// One field finished.
    Field,
    /// One record finished; every field of it has already been reported.
    Record,
}

/// Quote-aware tokenizer that turns a CSV stream into [`CsvEvent`]s.
///
/// Rows may differ in length and may span lines inside quotes. A final row
/// without a trailing newline is still reported once, and blank lines produce
/// no record. Any tokenizer error ends the stream.
pub struct CsvEvents<R> {
    reader: Reader<R>,
    record: ByteRecord,
    pending_fields: usize,
    record_open: bool,
    finished: bool,
}

impl<R: Read> CsvEvents<R> {
    #[must_use]
    pub fn new(source: R, delimiter: u8, quote: u8) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .quote(quote)
            .from_reader(source);
        Self {
            reader,
            record: ByteRecord::new(),
            pending_fields: 0,
            record_open: false,
            finished: false,
        }
    }
}

impl<R: Read> Iterator for CsvEvents<R> {
    type Item = Result<CsvEvent, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pending_fields > 0 {
                self.pending_fields -= 1;
                return Some(Ok(CsvEvent::Field));
            }
            if self.record_open {
                self.record_open = false;
                return Some(Ok(CsvEvent::Record));
            }
            if self.finished {
                return None;
            }
            match self.reader.read_byte_record(&mut self.record) {
                Ok(true) => {
                    self.pending_fields = self.record.len();
                    self.record_open = true;
                }
                Ok(false) => {
                    self.finished = true;
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
