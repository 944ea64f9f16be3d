//! Service entry point: configuration, schema setup, and HTTP server wiring.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ortho_config::OrthoConfig;

use hiredata::outbound::persistence::{DbPool, PoolConfig, run_startup_migrations};
use hiredata::server::{ServerConfig, create_server};
use hiredata::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|error| std::io::Error::other(format!("failed to load configuration: {error}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|error| std::io::Error::other(format!("invalid bind address: {error}")))?;

    let upload_dir = settings.upload_dir();
    std::fs::create_dir_all(&upload_dir)?;

    let pool = DbPool::new(PoolConfig::new(settings.database_url()))
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let mut conn = pool
        .get()
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    run_startup_migrations(&mut conn)
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    drop(conn);

    info!(
        %bind_addr,
        database = settings.database_url(),
        upload_dir = %upload_dir.display(),
        batch_size = settings.batch_size(),
        "starting hiring-data migration service"
    );

    let config = ServerConfig::new(bind_addr, pool, upload_dir)
        .with_batch_size(settings.batch_size());
    create_server(config)?.await
}
