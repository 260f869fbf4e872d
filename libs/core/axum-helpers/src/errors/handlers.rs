use axum::{
    extract::OriginalUri,
    http::Uri,
    response::{IntoResponse, Response},
};

use super::{ApiError, ErrorCode, request_path};

fn route_error(code: ErrorCode, uri: &Uri) -> Response {
    ApiError::new(code, code.default_message())
        .with_path(request_path(uri.path()))
        .into_response()
}

/// Router fallback for unmatched paths.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    route_error(ErrorCode::NotFound, &uri)
}

/// Install with `Router::method_not_allowed_fallback` on the router that owns
/// the routes; nested routers keep their own method fallbacks.
pub async fn method_not_allowed(OriginalUri(uri): OriginalUri) -> Response {
    route_error(ErrorCode::MethodNotAllowed, &uri)
}
