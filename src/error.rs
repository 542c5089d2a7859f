//! Application error type and its HTTP mapping.
//!
//! Every failure that reaches a handler is an [`AppError`]. The response body
//! is always a single-field JSON object:
//!
//! ```json
//! { "message": "Query (foo) was not found" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed client input (400).
    Validation { message: String },
    /// No tunnel matched the query (404).
    NotFound { message: String },
    /// The tunnel exists but has no proxy URL (503).
    Unavailable { message: String },
    /// Store failures and corrupted records (500).
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Unavailable { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status().as_u16())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Unavailable { message }
            | AppError::Internal { message } => message,
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", e);
        AppError::internal("Database error")
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        tracing::error!("Redis error: {}", e);
        AppError::internal("Cache store error")
    }
}
