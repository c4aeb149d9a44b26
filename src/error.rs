//! Error types for the shortening core and the HTTP layer.
//!
//! [`ServiceError`] is the business error taxonomy returned by
//! [`crate::application::services::ShortenService`]. [`AppError`] is what
//! handlers return; it renders as a JSON error body with a matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Errors produced by the shortening core.
///
/// Neither variant is retryable: both describe a problem with what the
/// caller sent.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The supplied string is not a parseable URL or has no host.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidInput { url: String, reason: String },

    /// No mapping exists for the short key.
    #[error("Unknown short key: {0}")]
    UnknownKey(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload nested under `"error"` in responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// HTTP-facing application error.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "validation_error",
///     "message": "Invalid URL format",
///     "details": { "reason": "relative URL without a base" }
///   }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Returns the status code and stable error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        }
    }

    /// Converts into the serializable error payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details } | AppError::NotFound { message, details } => {
                (message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput { url, reason } => AppError::bad_request(
                "Invalid URL format",
                json!({ "url": url, "reason": reason }),
            ),
            ServiceError::UnknownKey(key) => {
                AppError::not_found("Short link not found", json!({ "key": key }))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            json!({ "reason": errors.to_string() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
