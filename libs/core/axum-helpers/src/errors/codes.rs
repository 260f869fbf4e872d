//! Error identifiers reported in the `statusCode` field of error bodies.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::InvalidRequest.as_str(), "INVALID_REQUEST");
//! assert_eq!(ErrorCode::InvalidRequest.status().as_u16(), 400);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request data is missing, invalid, or refers to an unknown entity
    InvalidRequest,
    /// Request body is not valid JSON for the target type
    InvalidJson,
    /// No route matches the request
    NotFound,
    /// HTTP method is not supported by the matched route
    MethodNotAllowed,
    /// Storage backend failed to serve the request
    DatabaseError,
}

struct Descriptor {
    name: &'static str,
    log_code: i32,
    status: StatusCode,
    message: &'static str,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [
        Self::InvalidRequest,
        Self::InvalidJson,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::DatabaseError,
    ];

    const fn descriptor(self) -> Descriptor {
        match self {
            Self::InvalidRequest => Descriptor {
                name: "INVALID_REQUEST",
                log_code: 1001,
                status: StatusCode::BAD_REQUEST,
                message: "Invalid request",
            },
            Self::InvalidJson => Descriptor {
                name: "INVALID_JSON",
                log_code: 1003,
                status: StatusCode::BAD_REQUEST,
                message: "Invalid JSON format",
            },
            Self::NotFound => Descriptor {
                name: "NOT_FOUND",
                log_code: 1004,
                status: StatusCode::NOT_FOUND,
                message: "Resource not found",
            },
            Self::MethodNotAllowed => Descriptor {
                name: "METHOD_NOT_ALLOWED",
                log_code: 1006,
                status: StatusCode::METHOD_NOT_ALLOWED,
                message: "The HTTP method is not allowed for this resource",
            },
            Self::DatabaseError => Descriptor {
                name: "DATABASE_ERROR",
                log_code: 2003,
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Database error occurred",
            },
        }
    }

    /// Identifier clients match on; identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        self.descriptor().name
    }

    /// Integer attached to log events as `error_code`.
    /// 1xxx are client faults, 2xxx storage faults.
    pub const fn code(self) -> i32 {
        self.descriptor().log_code
    }

    /// HTTP status every body carrying this code is sent with.
    pub const fn status(self) -> StatusCode {
        self.descriptor().status
    }

    pub const fn default_message(self) -> &'static str {
        self.descriptor().message
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form_matches_as_str() {
        for code in ErrorCode::ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
            assert_eq!(code.to_string(), code.as_str());
        }
    }

    #[test]
    fn test_log_codes_are_unique() {
        let mut codes: Vec<i32> = ErrorCode::ALL.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_statuses() {
        assert_eq!(ErrorCode::InvalidRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidJson.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ErrorCode::DatabaseError.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"INVALID_REQUEST\"").unwrap();
        assert_eq!(code, ErrorCode::InvalidRequest);
        assert!(serde_json::from_str::<ErrorCode>("\"IO_ERROR\"").is_err());
    }
}
