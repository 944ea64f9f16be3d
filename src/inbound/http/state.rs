//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable with fixture implementations.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::ports::{DatasetIngestion, HiringReports};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub ingestion: Arc<dyn DatasetIngestion>,
    pub reports: Arc<dyn HiringReports>,
    /// Directory uploads are stored under before ingestion.
    pub upload_dir: PathBuf,
}

impl HttpState {
    /// Construct state from port implementations and the upload directory.
    pub fn new(
        ingestion: Arc<dyn DatasetIngestion>,
        reports: Arc<dyn HiringReports>,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            ingestion,
            reports,
            upload_dir,
        }
    }
}
