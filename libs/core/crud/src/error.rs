use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{ApiError, AppError, ErrorCode};
use thiserror::Error;

use crate::validation::ValidationFailure;

#[derive(Debug, Error)]
pub enum CrudError {
    /// Request refers to data that does not exist
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    App(#[from] AppError),
}

pub type CrudResult<T> = Result<T, CrudError>;

impl CrudError {
    /// Lookup of an unknown id, reported as an invalid request.
    pub fn not_found(resource: &str, id: &str) -> Self {
        CrudError::InvalidRequest(format!("{} not found with this id: {}", resource, id))
    }

    /// Renders the error for the request at `path` (`uri=<path>`).
    ///
    /// Validation failures carry their own path and never a timestamp.
    pub fn into_response_at(self, path: &str, include_timestamp: bool) -> Response {
        let body = match self.into_api_error() {
            Ok(body) => body.with_path(path),
            Err(failure) => return (StatusCode::BAD_REQUEST, Json(failure)).into_response(),
        };
        if include_timestamp {
            body.into_response()
        } else {
            body.without_timestamp().into_response()
        }
    }

    /// Logs the failure and builds its error body; validation failures keep
    /// their own shape.
    fn into_api_error(self) -> Result<ApiError, ValidationFailure> {
        match self {
            CrudError::Validation(failure) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidRequest.code(),
                    fields = ?failure.errors.keys().collect::<Vec<_>>(),
                    "Validation failed"
                );
                Err(failure)
            }
            CrudError::InvalidRequest(message) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidRequest.code(),
                    "Invalid request: {}",
                    message
                );
                Ok(ApiError::new(ErrorCode::InvalidRequest, message))
            }
            CrudError::Database(message) => Ok(AppError::Database(message).into_api_error()),
            CrudError::App(err) => Ok(err.into_api_error()),
        }
    }
}

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        match self.into_api_error() {
            Ok(body) => body.into_response(),
            Err(failure) => (StatusCode::BAD_REQUEST, Json(failure)).into_response(),
        }
    }
}

impl From<mongodb::error::Error> for CrudError {
    fn from(err: mongodb::error::Error) -> Self {
        CrudError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for CrudError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        CrudError::Database(format!("document encoding failed: {}", err))
    }
}

impl From<mongodb::bson::de::Error> for CrudError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        CrudError::Database(format!("document decoding failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_not_found_message() {
        let err = CrudError::not_found("Category", "123456");
        assert_eq!(err.to_string(), "Category not found with this id: 123456");
    }

    #[tokio::test]
    async fn test_invalid_request_response() {
        let response = CrudError::not_found("Product", "nonexistent")
            .into_response_at("uri=/api/v1/products/nonexistent", true);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["statusCode"], "INVALID_REQUEST");
        assert_eq!(body["message"], "Product not found with this id: nonexistent");
        assert_eq!(body["path"], "uri=/api/v1/products/nonexistent");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_timestamp_can_be_omitted() {
        let response = CrudError::not_found("Product", "x").into_response_at("uri=/x", false);
        let body = body_json(response).await;
        assert!(body.get("timestamp").is_none());
    }

    #[tokio::test]
    async fn test_database_error_is_generic_500() {
        let response = CrudError::Database("socket closed".to_string())
            .into_response_at("uri=/api/v1/categories", true);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["statusCode"], "DATABASE_ERROR");
        assert_ne!(body["message"], "socket closed");
    }
}
