//! HTTP inbound adapter exposing the upload and report endpoints.

pub mod envelope;
pub mod hello;
pub mod reports;
pub mod state;
pub mod upload;

use actix_web::web;

/// Register every endpoint on an Actix service config.
///
/// Shared between the production server and handler tests so route wiring
/// cannot drift between the two.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(hello::hello)
        .service(upload::upload_data)
        .service(reports::quarterly_hires_report)
        .service(reports::above_average_departments_report);
}
