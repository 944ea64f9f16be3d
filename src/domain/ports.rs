//! Domain ports.
//!
//! Driving port: [`DatasetIngestion`], implemented by the ingestion service
//! and consumed by the HTTP adapter. Driven ports: [`IngestionRepository`]
//! and [`HiringReports`], implemented by the persistence adapters. Fixture
//! implementations keep adapter tests free of persistence coupling.

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::dataset::DatasetKind;
use crate::domain::error::Error;
use crate::domain::ingestion::IngestionReport;
use crate::domain::records::Record;

/// Errors raised while persisting record batches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestionRepositoryError {
    /// A pooled connection could not be checked out.
    #[error("ingestion store connection failed: {message}")]
    Connection { message: String },

    /// The store rejected the chunk with a constraint violation; the
    /// transaction was rolled back.
    #[error("ingestion store rejected the batch: {message}")]
    IntegrityViolation { message: String },

    /// Any other query failure during the chunk insert.
    #[error("ingestion store query failed: {message}")]
    Query { message: String },
}

impl IngestionRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create an integrity-violation error with the given message.
    pub fn integrity_violation(message: impl Into<String>) -> Self {
        Self::IntegrityViolation {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for chunked, transactional record persistence.
#[async_trait]
pub trait IngestionRepository: Send + Sync {
    /// Insert one chunk of records in a single transaction, preserving input
    /// order, and return the number of rows written.
    ///
    /// Implementations must roll the whole chunk back on any constraint
    /// violation so a failed chunk persists zero rows.
    async fn insert_records(&self, records: Vec<Record>) -> Result<usize, IngestionRepositoryError>;
}

/// Errors raised while running report queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportsRepositoryError {
    /// A pooled connection could not be checked out.
    #[error("reports store connection failed: {message}")]
    Connection { message: String },

    /// The report query failed during execution.
    #[error("report query failed: {message}")]
    Query { message: String },
}

impl ReportsRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Hires per calendar quarter of 2021 for one department/job pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterlyHires {
    pub department: String,
    pub job: String,
    #[serde(rename = "Q1")]
    pub q1: i64,
    #[serde(rename = "Q2")]
    pub q2: i64,
    #[serde(rename = "Q3")]
    pub q3: i64,
    #[serde(rename = "Q4")]
    pub q4: i64,
}

/// 2021 hire count for one department hiring above the cross-department mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentHires {
    pub id: i32,
    pub department: String,
    pub hired: i64,
}

/// Port for the two canned aggregate reports.
#[async_trait]
pub trait HiringReports: Send + Sync {
    /// Hires per quarter of 2021, grouped by department and job, ordered by
    /// department then job.
    async fn quarterly_hires(&self) -> Result<Vec<QuarterlyHires>, ReportsRepositoryError>;

    /// Departments whose 2021 hire count exceeds the 2021 mean across
    /// departments, ordered by hire count descending.
    async fn above_average_departments(&self)
    -> Result<Vec<DepartmentHires>, ReportsRepositoryError>;
}

/// Driving port: ingest one uploaded dataset file.
#[async_trait]
pub trait DatasetIngestion: Send + Sync {
    /// Stream the file at `path` through the ingestion pipeline for `kind`.
    async fn ingest_file(&self, kind: DatasetKind, path: &Path) -> Result<IngestionReport, Error>;
}

/// Fixture repository that accepts every chunk without persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureIngestionRepository;

#[async_trait]
impl IngestionRepository for FixtureIngestionRepository {
    async fn insert_records(&self, records: Vec<Record>) -> Result<usize, IngestionRepositoryError> {
        Ok(records.len())
    }
}

/// Fixture reports implementation returning empty result sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureHiringReports;

#[async_trait]
impl HiringReports for FixtureHiringReports {
    async fn quarterly_hires(&self) -> Result<Vec<QuarterlyHires>, ReportsRepositoryError> {
        Ok(Vec::new())
    }

    async fn above_average_departments(
        &self,
    ) -> Result<Vec<DepartmentHires>, ReportsRepositoryError> {
        Ok(Vec::new())
    }
}
