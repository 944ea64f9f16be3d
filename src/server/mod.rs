//! Server construction and dependency wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use crate::domain::IngestionService;
use crate::inbound::http;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{DieselIngestionRepository, DieselReportsRepository};

/// Construct an Actix HTTP server with database-backed adapters.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ingestion_repository = Arc::new(DieselIngestionRepository::new(config.db_pool.clone()));
    let ingestion = Arc::new(IngestionService::new(
        ingestion_repository,
        config.batch_size,
    ));
    let reports = Arc::new(DieselReportsRepository::new(config.db_pool.clone()));
    let state = web::Data::new(HttpState::new(ingestion, reports, config.upload_dir.clone()));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(http::configure)
    })
    .bind(config.bind_addr)?
    .run();

    Ok(server)
}
