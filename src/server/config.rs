//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) upload_dir: PathBuf,
    pub(crate) batch_size: usize,
}

impl ServerConfig {
    /// Construct a server configuration from application settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, upload_dir: PathBuf) -> Self {
        Self {
            bind_addr,
            db_pool,
            upload_dir,
            batch_size: crate::domain::ingestion::DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the ingestion committer's chunk bound.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
