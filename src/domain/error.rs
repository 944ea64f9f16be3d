//! Domain-level error type.
//!
//! Errors carry a stable category code plus a human-readable message and are
//! transport agnostic; the HTTP adapter decides how they appear on the wire.

/// Stable machine-readable code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed (bad multipart payload, missing file field).
    InvalidRequest,
    /// The uploaded stream is not well-formed delimited text.
    InvalidCsv,
    /// A row carries fewer fields than its dataset layout expects.
    SchemaMismatch,
    /// The store rejected a batch with a constraint violation.
    IntegrityViolation,
    /// The store could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Domain error value.
///
/// # Examples
/// ```
/// use hiredata::domain::{Error, ErrorCode};
///
/// let err = Error::schema_mismatch("row has 1 field, expected 2");
/// assert_eq!(err.code(), ErrorCode::SchemaMismatch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error with an explicit category.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message surfaced to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidCsv`].
    pub fn invalid_csv(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCsv, message)
    }

    /// Convenience constructor for [`ErrorCode::SchemaMismatch`].
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SchemaMismatch, message)
    }

    /// Convenience constructor for [`ErrorCode::IntegrityViolation`].
    pub fn integrity_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IntegrityViolation, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
