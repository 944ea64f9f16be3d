//! Embedded schema migrations, run once at process start.
//!
//! The migration harness records applied versions, so startup is idempotent:
//! existing tables are left untouched on every subsequent boot.

use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// All migrations under the crate's `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Error raised when startup schema setup fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("schema migration failed: {message}")]
pub struct MigrationError {
    message: String,
}

/// Apply any pending migrations on the given connection.
pub fn run_startup_migrations(conn: &mut SqliteConnection) -> Result<(), MigrationError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|error| MigrationError {
            message: error.to_string(),
        })
}
