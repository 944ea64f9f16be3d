//! Report endpoints.
//!
//! Both reports answer the envelope contract: a `success` body carrying the
//! row array serialized as a JSON string, a `message` body when no rows
//! match, or an `error` body on failure.

use actix_web::{HttpResponse, get, web};
use serde::Serialize;

use crate::domain::Error;
use crate::domain::ports::ReportsRepositoryError;

use super::envelope;
use super::state::HttpState;

const NO_DATA_MESSAGE: &str = "No data available for given criteria";

fn map_reports_error(error: ReportsRepositoryError) -> Error {
    match error {
        ReportsRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("reports store unavailable: {message}"))
        }
        ReportsRepositoryError::Query { message } => {
            Error::internal(format!("report query failed: {message}"))
        }
    }
}

fn render_rows<T: Serialize>(rows: Vec<T>) -> HttpResponse {
    if rows.is_empty() {
        return envelope::message(NO_DATA_MESSAGE);
    }
    match serde_json::to_string(&rows) {
        Ok(payload) => envelope::success(payload),
        Err(error) => envelope::failure(&Error::internal(format!(
            "failed to serialize report rows: {error}"
        ))),
    }
}

/// Hires per calendar quarter of 2021, grouped by department and job.
#[get("/rq1")]
pub async fn quarterly_hires_report(state: web::Data<HttpState>) -> HttpResponse {
    match state.reports.quarterly_hires().await {
        Ok(rows) => render_rows(rows),
        Err(error) => envelope::failure(&map_reports_error(error)),
    }
}

/// Departments hiring above the 2021 cross-department mean.
#[get("/rq2")]
pub async fn above_average_departments_report(state: web::Data<HttpState>) -> HttpResponse {
    match state.reports.above_average_departments().await {
        Ok(rows) => render_rows(rows),
        Err(error) => envelope::failure(&map_reports_error(error)),
    }
}
