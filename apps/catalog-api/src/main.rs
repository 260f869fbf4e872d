use axum_helpers::server::{create_router, health_router, serve};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Connects the configured storage backend.
async fn open_storage(config: Config) -> eyre::Result<AppState> {
    let Some(mongo) = config.mongodb.clone() else {
        info!("Using in-memory storage; data is lost on restart");
        return Ok(AppState::in_memory(config));
    };

    info!(url = mongo.url(), database = mongo.database(), "Using MongoDB storage");
    let client = database::mongodb::connect_from_config_with_retry(&mongo, None).await?;
    let db = client.database(mongo.database());
    Ok(AppState::with_mongo(config, client, db))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(config.environment);

    let state = open_storage(config).await?;
    let app = create_router::<openapi::ApiDoc>(api::routes(&state))?
        .merge(health_router(state.config.app));

    info!(
        backend = ?state.config.storage,
        min_stock = state.config.catalog.product_min_stock,
        shutdown_timeout = ?state.config.server.shutdown_timeout,
        "Starting Catalog API"
    );

    let mongo_client = state.mongo_client.clone();
    serve(app, &state.config.server, async move {
        if let Some(client) = mongo_client {
            info!("Closing MongoDB connections");
            client.shutdown().await;
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
