//! Readiness endpoint

use axum::{Router, extract::State, routing::get};
use axum_helpers::{HealthCheckFuture, ReadinessReport, run_health_checks};

use crate::state::AppState;

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the storage backend is reachable
async fn readiness_check(State(state): State<AppState>) -> ReadinessReport {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = match &state.mongo_client {
        Some(client) => vec![(
            "mongodb",
            Box::pin(database::mongodb::check_health(client)),
        )],
        None => vec![("memory", Box::pin(async { Ok(()) }))],
    };

    run_health_checks(checks).await
}
