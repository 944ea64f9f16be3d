//! Headerless CSV row source.
//!
//! Wraps the `csv` crate reader as a lazy, finite, non-restartable sequence
//! of rows of raw string fields. Upload files carry no header row, and rows
//! may legitimately differ in width (the column mapper enforces per-dataset
//! arity), so the reader runs in flexible mode. No business logic here.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::domain::error::Error;

/// Lazy row sequence over one uploaded byte stream.
pub struct CsvSource<R: Read> {
    rows: StringRecordsIntoIter<R>,
}

impl<R: Read> CsvSource<R> {
    /// Wrap a byte stream as a headerless CSV row sequence.
    pub fn new(inner: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(inner);
        Self {
            rows: reader.into_records(),
        }
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = Result<StringRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows
            .next()
            .map(|row| row.map_err(|error| Error::invalid_csv(error.to_string())))
    }
}
