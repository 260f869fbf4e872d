//! Router assembly, health endpoints and the serve loop.
//!
//! ```ignore
//! let app = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! serve(app, &config.server, async move { client.shutdown().await }).await?;
//! ```

pub mod app;
pub mod health;
pub mod lifecycle;

pub use app::create_router;
pub use health::{
    HealthCheckFuture, HealthResponse, ReadinessReport, health_router, run_health_checks,
};
pub use lifecycle::{run_cleanup, serve, serve_on, shutdown_signal};
