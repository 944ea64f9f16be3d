//! Uniform JSON response envelope.
//!
//! The wire contract discriminates outcomes in the body, not the status
//! line: every endpoint answers HTTP 200 with exactly one of `success`,
//! `message`, or `error`. Handlers log failures here before they are
//! flattened into the envelope.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode};

/// Body shape for completed operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub success: String,
}

/// Body shape for informational outcomes (e.g. an empty report).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Body shape for failed operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Answer 200 with a `success` body.
pub fn success(text: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(SuccessBody {
        success: text.into(),
    })
}

/// Answer 200 with a `message` body.
pub fn message(text: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(MessageBody {
        message: text.into(),
    })
}

/// Answer 200 with an `error` body, logging by severity.
pub fn failure(error: &Error) -> HttpResponse {
    match error.code() {
        ErrorCode::ServiceUnavailable | ErrorCode::InternalError => {
            error!(code = ?error.code(), message = error.message(), "request failed");
        }
        _ => {
            warn!(code = ?error.code(), message = error.message(), "request rejected");
        }
    }
    HttpResponse::Ok().json(ErrorBody {
        error: error.message().to_owned(),
    })
}
