use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info};

/// Middleware that logs every request the way a call tracer would.
///
/// For each request it records:
/// - entry into the operation (route template and method)
/// - the call arguments (method, uri, query)
/// - the execution time in milliseconds and the response status
/// - exit from the operation
///
/// Request bodies are not read; handlers log their own inputs at debug level.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let operation = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| uri.path().to_owned());

    info!(%method, %operation, "Start of {} {}", method, operation);
    debug!(
        %method,
        uri = %uri,
        query = uri.query().unwrap_or_default(),
        "Arguments of {} {}",
        method,
        operation
    );

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = started.elapsed().as_millis();

    info!(
        %method,
        %operation,
        status = response.status().as_u16(),
        elapsed_ms,
        "{} {} executed in {} ms",
        method,
        operation,
        elapsed_ms
    );
    info!(%method, %operation, "End of {} {}", method, operation);

    response
}
