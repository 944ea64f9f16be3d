//! Application configuration loaded via OrthoConfig.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "hiredata.db";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration values controlling the service at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HIREDATA")]
pub struct AppSettings {
    /// SQLite database path.
    pub database_url: Option<String>,
    /// Directory uploaded files are stored under.
    pub upload_dir: Option<PathBuf>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Ingestion committer chunk bound.
    pub batch_size: Option<usize>,
}

impl AppSettings {
    /// Return the configured database path, falling back to the default.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Return the configured upload directory, falling back to the default.
    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR))
    }

    /// Parse the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Return the committer bound, clamped to at least one record.
    pub fn batch_size(&self) -> usize {
        self.batch_size
            .unwrap_or(crate::domain::ingestion::DEFAULT_BATCH_SIZE)
            .max(1)
    }
}
