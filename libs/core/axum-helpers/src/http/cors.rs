use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

pub const CORS_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGIN";

/// CORS for an explicit origin list; the API only reads and creates.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Origins from `CORS_ALLOWED_ORIGIN` (comma-separated); any origin when unset.
///
/// # Errors
/// The variable is set but lists no origin or an invalid header value.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    match std::env::var(CORS_ORIGINS_VAR) {
        Ok(raw) => {
            let origins = parse_origins(&raw)?;
            info!(origins = %raw, "CORS restricted to configured origins");
            Ok(create_cors_layer(origins))
        }
        Err(_) => {
            info!("{} not set, allowing any origin", CORS_ORIGINS_VAR);
            Ok(CorsLayer::permissive())
        }
    }
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let invalid = |details: String| io::Error::new(io::ErrorKind::InvalidInput, details);

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| invalid(format!("Invalid {} entry {:?}: {}", CORS_ORIGINS_VAR, origin, e)))
        })
        .collect::<io::Result<Vec<_>>>()?;

    if origins.is_empty() {
        return Err(invalid(format!("{} cannot be empty", CORS_ORIGINS_VAR)));
    }
    Ok(origins)
}
