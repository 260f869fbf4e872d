//! HTTP plumbing shared by the catalog domains and the API binary.
//!
//! - [`errors`]: the `ApiError` body, its codes and the router fallbacks
//! - [`server`]: router assembly with OpenAPI UIs, health endpoints, serve loop
//! - [`http`]: CORS, security headers and request logging middleware

pub mod errors;
pub mod http;
pub mod server;

pub use errors::{ApiError, AppError, ErrorCode, request_path};
pub use http::{request_logging, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, ReadinessReport, create_router, health_router,
    run_health_checks, serve, serve_on, shutdown_signal,
};
