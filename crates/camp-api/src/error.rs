//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps validation failures, missing rows, and store errors to HTTP status
//! codes with a `{"error": "<message>"}` body. Internal error details are
//! logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// JSON error response body shared by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
///
/// The `Display` text of every client-facing variant is the message itself,
/// so handlers choose exactly what the caller reads.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("{0}")]
    NotFound(String),

    /// A field rule was violated (400).
    #[error("{0}")]
    Validation(String),

    /// Body could not be parsed, or the store rejected the write (400).
    #[error("{0}")]
    BadRequest(String),

    /// The row is still referenced and cannot be removed (409).
    #[error("{0}")]
    Conflict(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),

    /// A dependency is not ready (503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} not found"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::ServiceUnavailable(_) => tracing::warn!(error = %self, "service unavailable"),
            _ => tracing::debug!(status = status.as_u16(), error = %self, "request rejected"),
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<camp_core::ValidationError> for AppError {
    fn from(err: camp_core::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Classify store errors.
///
/// Constraint violations mean the client sent something the schema refuses,
/// so they become 400s. Everything else is a server fault.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound("record not found".to_string()),
            sqlx::Error::Database(db) => {
                if db.is_foreign_key_violation() {
                    Self::BadRequest(format!("referenced record does not exist: {}", db.message()))
                } else if db.is_check_violation() {
                    Self::Validation(format!("constraint failed: {}", db.message()))
                } else if db.is_unique_violation() {
                    Self::BadRequest(format!("duplicate record: {}", db.message()))
                } else if matches!(db.kind(), sqlx::error::ErrorKind::NotNullViolation)
                    || db.message().contains("constraint failed")
                {
                    Self::BadRequest(format!("constraint failed: {}", db.message()))
                } else {
                    Self::Internal(err.to_string())
                }
            }
            _ => Self::Internal(err.to_string()),
        }
    }
}
