//! OpenAPI response types for the resource routers.

#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

use crate::validation::ValidationFailure;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Field validation failed",
    content_type = "application/json",
    example = json!({
        "statusCode": "INVALID_REQUEST",
        "path": "uri=/api/v1/categories",
        "message": "Invalid Request Data, Your request is either missing required data or contains invalid values",
        "errors": {
            "name": "must not be blank",
            "description": "must not be blank"
        }
    })
)]
pub struct BadRequestValidationResponse(pub ValidationFailure);
