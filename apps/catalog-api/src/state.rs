//! Application state management.
//!
//! This module defines the shared application state passed to the readiness
//! handler and used to wire the resource routers.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the MongoDB client shares its connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, absent for the in-memory backend
    pub mongo_client: Option<Client>,
    /// MongoDB database instance, absent for the in-memory backend
    pub db: Option<Database>,
}

impl AppState {
    /// State for the in-memory backend
    pub fn in_memory(config: crate::config::Config) -> Self {
        Self {
            config,
            mongo_client: None,
            db: None,
        }
    }

    pub fn with_mongo(config: crate::config::Config, client: Client, db: Database) -> Self {
        Self {
            config,
            mongo_client: Some(client),
            db: Some(db),
        }
    }
}
