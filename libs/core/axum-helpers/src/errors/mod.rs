pub mod codes;
pub mod handlers;
pub mod responses;
pub mod timestamp;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error body.
///
/// Every client-facing failure that is not a field-level validation failure
/// is reported with this shape.
///
/// # JSON Example
///
/// ```json
/// {
///   "statusCode": "INVALID_REQUEST",
///   "message": "Category not found with this id: 123456",
///   "path": "uri=/api/v1/categories/123456",
///   "timestamp": "16-10-2026 09:15:02"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error identifier
    pub status_code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request context the error was raised for (`uri=<path>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Creation instant, `dd-MM-yyyy HH:mm:ss` UTC
    #[serde(
        default,
        with = "timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "16-10-2026 09:15:02")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ApiError {
    /// Creates an error body stamped with the current instant.
    pub fn new(status_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            path: None,
            timestamp: Some(Utc::now()),
        }
    }

    /// Attaches the request context.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Drops the timestamp (for deployments that do not report it).
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code.status(), Json(self)).into_response()
    }
}

/// Renders a request path the way error bodies report it.
pub fn request_path(path: &str) -> String {
    format!("uri={}", path)
}

/// Failures raised below the domain layer.
///
/// Domain error types wrap this for anything they do not render themselves.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    MalformedJson(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Logs the failure and builds the body clients receive.
    ///
    /// Storage details stay in the logs.
    pub fn into_api_error(self) -> ApiError {
        match self {
            AppError::MalformedJson(rejection) => {
                let code = ErrorCode::InvalidJson;
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", rejection);
                ApiError::new(code, rejection.body_text())
            }
            AppError::Database(detail) => {
                let code = ErrorCode::DatabaseError;
                tracing::error!(error_code = code.code(), "Database error: {}", detail);
                ApiError::new(code, code.default_message())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_api_error().into_response()
    }
}
