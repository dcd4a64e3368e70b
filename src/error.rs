//! Application error type and its HTTP mapping.
//!
//! Every failure a request can hit is expressed as an [`AppError`]. Handlers
//! return `Result<_, AppError>` and axum turns the error into a JSON body of
//! the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed client input, including URLs that are not `http(s)`.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A short code collided with an existing link.
    ///
    /// Recovered by the shortening service; only escapes if a caller inserts
    /// directly through the repository.
    #[error("Short code '{code}' already exists")]
    DuplicateCode { code: String },

    #[error("Failed to allocate a unique short code after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
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

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn is_duplicate_code(&self) -> bool {
        matches!(self, Self::DuplicateCode { .. })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateCode { .. } | Self::ExhaustedRetries { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into the serializable payload sent to clients.
    ///
    /// Internal details are never exposed; they are logged instead.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            Self::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            Self::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            Self::DuplicateCode { .. } => ErrorInfo {
                code: "duplicate_code",
                message: "Failed to save link".to_string(),
                details: json!({}),
            },
            Self::ExhaustedRetries { attempts } => ErrorInfo {
                code: "exhausted_retries",
                message: "Failed to save link".to_string(),
                details: json!({ "attempts": attempts }),
            },
            Self::Internal { message, .. } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal { message, details } = &self {
            tracing::error!(%message, %details, "Request failed with internal error");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::internal("Database migration failed", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::validation(
            "Invalid URL. Make sure the link starts with http:// or https://",
            serde_json::to_value(&errors).unwrap_or_default(),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(
            "Malformed request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(
            "Malformed path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
