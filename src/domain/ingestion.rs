//! Ingestion orchestration: rows through mapping, normalization, and the
//! chunked batch committer.
//!
//! One upload is processed start to finish on the handling request. Rows
//! stream through the pipeline in input order and are committed in bounded
//! transactional chunks: the committer flushes whenever the buffer reaches
//! the batch bound and once more for the remainder after the final row. A
//! chunk that fails a constraint rolls back alone; chunks committed earlier
//! in the same upload stay, and ingestion stops at the failure.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::csv_source::CsvSource;
use crate::domain::dataset::DatasetKind;
use crate::domain::error::Error;
use crate::domain::normalize::normalize_row;
use crate::domain::ports::{DatasetIngestion, IngestionRepository, IngestionRepositoryError};
use crate::domain::records::Record;

/// Committer bound used when configuration does not override it.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Outcome of one upload's ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionReport {
    pub dataset: DatasetKind,
    pub rows_read: usize,
    pub rows_inserted: usize,
    pub batches_committed: usize,
}

/// Accumulates normalized records and flushes them in bounded chunks.
pub struct BatchCommitter<'a, R: ?Sized> {
    repository: &'a R,
    batch_size: usize,
    buffer: Vec<Record>,
    rows_inserted: usize,
    batches_committed: usize,
}

impl<'a, R: IngestionRepository + ?Sized> BatchCommitter<'a, R> {
    /// Create a committer over `repository` with the given chunk bound.
    pub fn new(repository: &'a R, batch_size: usize) -> Self {
        Self {
            repository,
            batch_size: batch_size.max(1),
            buffer: Vec::new(),
            rows_inserted: 0,
            batches_committed: 0,
        }
    }

    /// Append one record, flushing when the buffer reaches the bound.
    pub async fn push(&mut self, record: Record) -> Result<(), Error> {
        self.buffer.push(record);
        if self.buffer.len() >= self.batch_size {
            self.flush().await?;
        }
        Ok(())
    }

    /// Commit the buffered records as one transaction.
    async fn flush(&mut self) -> Result<(), Error> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let chunk = std::mem::take(&mut self.buffer);
        let written = self
            .repository
            .insert_records(chunk)
            .await
            .map_err(map_repository_error)?;
        self.rows_inserted += written;
        self.batches_committed += 1;
        debug!(
            rows = written,
            batches = self.batches_committed,
            "committed ingestion chunk"
        );
        Ok(())
    }

    /// Flush the remainder after the final row and return totals.
    pub async fn finish(mut self) -> Result<(usize, usize), Error> {
        self.flush().await?;
        Ok((self.rows_inserted, self.batches_committed))
    }
}

fn map_repository_error(error: IngestionRepositoryError) -> Error {
    match error {
        IngestionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("ingestion store unavailable: {message}"))
        }
        IngestionRepositoryError::IntegrityViolation { message } => {
            Error::integrity_violation(message)
        }
        IngestionRepositoryError::Query { message } => {
            Error::internal(format!("ingestion failed: {message}"))
        }
    }
}

/// Domain service implementing dataset ingestion over a record repository.
pub struct IngestionService<R> {
    repository: Arc<R>,
    batch_size: usize,
}

impl<R> IngestionService<R> {
    /// Create a new ingestion service with the given chunk bound.
    pub fn new(repository: Arc<R>, batch_size: usize) -> Self {
        Self {
            repository,
            batch_size: batch_size.max(1),
        }
    }
}

impl<R: IngestionRepository> IngestionService<R> {
    /// Stream rows from `source` through the pipeline for `kind`.
    pub async fn ingest(
        &self,
        kind: DatasetKind,
        source: impl Read + Send,
    ) -> Result<IngestionReport, Error> {
        let mut committer = BatchCommitter::new(self.repository.as_ref(), self.batch_size);
        let mut rows_read = 0;

        for row in CsvSource::new(source) {
            let row = row?;
            rows_read += 1;
            let record = normalize_row(kind, &row)?;
            committer.push(record).await?;
        }

        let (rows_inserted, batches_committed) = committer.finish().await?;
        Ok(IngestionReport {
            dataset: kind,
            rows_read,
            rows_inserted,
            batches_committed,
        })
    }
}

#[async_trait]
impl<R: IngestionRepository> DatasetIngestion for IngestionService<R> {
    async fn ingest_file(&self, kind: DatasetKind, path: &Path) -> Result<IngestionReport, Error> {
        let file = std::fs::File::open(path).map_err(|error| {
            Error::internal(format!(
                "failed to open uploaded file {}: {error}",
                path.display()
            ))
        })?;
        self.ingest(kind, std::io::BufReader::new(file)).await
    }
}
