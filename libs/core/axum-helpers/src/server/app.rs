use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, request_logging, security_headers};
use axum::{Router, middleware};
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Swagger UI, ReDoc, RapiDoc and Scalar, all rendering `T`.
fn documentation<T: OpenApi>() -> Router {
    let doc = T::openapi();
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON, doc.clone()))
        .merge(Redoc::with_url("/redoc", doc.clone()))
        .merge(RapiDoc::new(OPENAPI_JSON).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", doc))
}

/// Mounts `apis` under `/api` next to the documentation UIs and wraps the
/// whole tree in the shared middleware.
///
/// Unknown paths get a `NOT_FOUND` error body. CORS origins come from
/// `CORS_ALLOWED_ORIGIN`; an unset variable allows every origin.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` is set but empty or invalid.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = cors_layer_from_env()?;
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(documentation::<T>()
        .nest("/api", apis.layer(middleware::from_fn(request_logging)))
        .fallback(not_found)
        .layer(trace)
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new()))
}
