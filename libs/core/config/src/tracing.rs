use crate::Environment;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
///
/// Catalog crates log request-level events at `info`; driver chatter is kept
/// down, more so in production.
pub fn default_directives(environment: Environment) -> &'static str {
    if environment.is_production() {
        "info,catalog_api=info,entity_crud=info,tower_http=info,mongodb=warn"
    } else {
        "debug,catalog_api=debug,entity_crud=debug,tower_http=debug,mongodb=info,hyper=info"
    }
}

/// Colored eyre reports with source locations; repeated installs are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Installs the global subscriber: flattened JSON in production, pretty output
/// otherwise. `ErrorLayer` captures span traces for eyre reports.
///
/// Returns `false` when a subscriber was already installed (tests).
pub fn init_tracing(environment: Environment) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let installed = if environment.is_production() {
        registry
            .with(fmt::layer().json().flatten_event(true).with_target(false))
            .try_init()
    } else {
        registry.with(fmt::layer().pretty().with_target(true)).try_init()
    }
    .is_ok();

    if installed {
        tracing::info!(?environment, "Tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_quiets_mongodb_driver() {
        let directives = default_directives(Environment::Production);
        assert!(directives.starts_with("info,"));
        assert!(directives.contains("mongodb=warn"));
        assert!(default_directives(Environment::Development).contains("entity_crud=debug"));
    }

    #[test]
    fn test_default_directives_parse() {
        for environment in [Environment::Development, Environment::Production] {
            assert!(EnvFilter::try_new(default_directives(environment)).is_ok());
        }
    }

    #[test]
    fn test_second_init_is_a_no_op() {
        init_tracing(Environment::Development);
        assert!(!init_tracing(Environment::Production));
    }
}
