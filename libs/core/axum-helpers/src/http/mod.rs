//! Middleware shared by every route: CORS, hardening headers and call logging.

pub mod cors;
pub mod request_log;
pub mod security;

pub use cors::{cors_layer_from_env, create_cors_layer};
pub use request_log::request_logging;
pub use security::security_headers;
