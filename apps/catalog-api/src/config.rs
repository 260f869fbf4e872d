use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig,
};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Where entities are kept
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local, lost on restart
    Memory,
    MongoDb,
}

impl FromEnv for StorageBackend {
    /// Reads `STORAGE_BACKEND` (`memory` by default, or `mongodb`)
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("STORAGE_BACKEND", "memory");
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            other => Err(ConfigError::invalid(
                "STORAGE_BACKEND",
                format!("unknown backend '{}', expected 'memory' or 'mongodb'", other),
            )),
        }
    }
}

/// Catalog rules and error rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Lowest accepted `stock` on product creation
    pub product_min_stock: i32,
    /// Stamp error bodies with their creation time
    pub include_timestamps: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            product_min_stock: domain_products::DEFAULT_MIN_STOCK,
            include_timestamps: true,
        }
    }
}

impl FromEnv for CatalogConfig {
    /// Reads `PRODUCT_MIN_STOCK` (default 1) and `ERROR_TIMESTAMPS` (default true)
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let product_min_stock = env_parse("PRODUCT_MIN_STOCK", defaults.product_min_stock)?;
        let include_timestamps = env_parse("ERROR_TIMESTAMPS", defaults.include_timestamps)?;

        Ok(Self {
            product_min_stock,
            include_timestamps,
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub storage: StorageBackend,
    /// Present only for the MongoDB backend
    pub mongodb: Option<MongoConfig>,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let storage = StorageBackend::from_env()?;
        let mongodb = match storage {
            StorageBackend::MongoDb => Some(MongoConfig::from_env()?),
            StorageBackend::Memory => None,
        };
        let catalog = CatalogConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            storage,
            mongodb,
            catalog,
        })
    }
}
