//! Reusable OpenAPI response types for consistent API documentation.

use super::ApiError;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "statusCode": "DATABASE_ERROR",
        "message": "Database error occurred",
        "path": "uri=/api/v1/products",
        "timestamp": "16-10-2026 09:15:02"
    })
)]
pub struct InternalServerErrorResponse(pub ApiError);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Unknown identifier",
    content_type = "application/json",
    example = json!({
        "statusCode": "INVALID_REQUEST",
        "message": "Category not found with this id: 123456",
        "path": "uri=/api/v1/categories/123456",
        "timestamp": "16-10-2026 09:15:02"
    })
)]
pub struct BadRequestInvalidRequestResponse(pub ApiError);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed JSON body",
    content_type = "application/json",
    example = json!({
        "statusCode": "INVALID_JSON",
        "message": "Failed to parse the request body as JSON",
        "path": "uri=/api/v1/categories",
        "timestamp": "16-10-2026 09:15:02"
    })
)]
pub struct BadRequestJsonResponse(pub ApiError);
