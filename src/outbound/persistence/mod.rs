//! SQLite persistence adapters built on Diesel.
//!
//! The pool hands out pooled synchronous connections; repository adapters run
//! their Diesel work on the Actix blocking pool so handler futures are not
//! blocked. Schema setup happens once at startup via embedded migrations.

mod diesel_ingestion_repository;
mod diesel_reports_repository;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod schema;

pub use diesel_ingestion_repository::DieselIngestionRepository;
pub use diesel_reports_repository::DieselReportsRepository;
pub use migrations::run_startup_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
