// src/core/counter.rs
use memchr::{memchr_iter, memmem};

/// Counts the fields in one plain-mode record.
///
/// Scans left to right for non-overlapping matches of `delimiter`, jumping past
/// the whole match each time, and returns the number of matches plus one. An
/// empty record is one empty field. Quotes carry no meaning here: a delimiter
/// inside quotes still splits the record.
///
/// # Arguments
///
/// * `record` - The record bytes, without the line terminator
/// * `delimiter` - The field separator; must not be empty
///
/// # Returns
///
/// The number of fields in `record`, always at least one.
#[inline]
#[must_use]
pub fn count_fields(record: &[u8], delimiter: &[u8]) -> usize {
    occurrences(record, delimiter).saturating_add(1)
}

/// Counts the non-overlapping occurrences of `delimiter` in `record`.
///
/// An empty delimiter never matches.
#[inline]
#[must_use]
pub fn occurrences(record: &[u8], delimiter: &[u8]) -> usize {
    if delimiter.is_empty() {
        return 0;
    }
    if let [byte] = delimiter {
        return memchr_iter(*byte, record).count();
    }
    memmem::find_iter(record, delimiter).count()
}

/// Splits `record` literally on `delimiter`, keeping empty fields.
///
/// Yields the same number of pieces as [`count_fields`] reports.
#[inline]
#[must_use]
pub const fn split_fields<'a>(record: &'a [u8], delimiter: &'a [u8]) -> Fields<'a> {
    Fields {
        rest: Some(record),
        delimiter,
    }
}

/// Iterator over the fields of one record, see [`split_fields`].
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: Option<&'a [u8]>,
    delimiter: &'a [u8],
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let found = if self.delimiter.is_empty() {
            None
        } else {
            memmem::find(rest, self.delimiter)
        };
        match found {
            Some(offset) => {
                self.rest = Some(&rest[offset + self.delimiter.len()..]);
                Some(&rest[..offset])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
