//! Environment-driven configuration shared by the catalog crates.
//!
//! Every setting is read once at startup through [`FromEnv`]; parsing
//! failures name the offending variable.

pub mod server;
pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    Missing(String),

    #[error("Invalid value for environment variable '{key}': {details}")]
    Invalid { key: String, details: String },
}

impl ConfigError {
    pub fn invalid(key: &str, details: impl Display) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            details: details.to_string(),
        }
    }
}

/// Deployment flavour, from `APP_ENV`; anything but `production` is development.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        env::var("APP_ENV")
            .map(|value| Self::from_name(&value))
            .unwrap_or_default()
    }

    fn from_name(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// Static identity of the running binary, reported by the health endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Builds an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Raw value of `key`, or `default` when unset
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// First set variable among `keys` (primary name, then aliases)
pub fn env_first(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env::var(key).ok())
}

/// Trimmed and parsed value of `key`, or `default` when unset
pub fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_app_env() {
        temp_env::with_var_unset("APP_ENV", || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
        temp_env::with_var("APP_ENV", Some(" Production "), || {
            assert!(Environment::from_env().is_production());
        });
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_app_info_macro_uses_package_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }

    #[test]
    fn test_env_first_prefers_primary_name() {
        temp_env::with_vars(
            [("CATALOG_PRIMARY", Some("a")), ("CATALOG_ALIAS", Some("b"))],
            || {
                assert_eq!(
                    env_first(&["CATALOG_PRIMARY", "CATALOG_ALIAS"]).as_deref(),
                    Some("a")
                );
            },
        );
        temp_env::with_vars(
            [("CATALOG_PRIMARY", None), ("CATALOG_ALIAS", Some("b"))],
            || {
                assert_eq!(
                    env_first(&["CATALOG_PRIMARY", "CATALOG_ALIAS"]).as_deref(),
                    Some("b")
                );
            },
        );
    }

    #[test]
    fn test_env_parse_default_value_and_error() {
        temp_env::with_var_unset("CATALOG_LIMIT", || {
            assert_eq!(env_parse("CATALOG_LIMIT", 7u32), Ok(7));
        });
        temp_env::with_var("CATALOG_LIMIT", Some(" 12 "), || {
            assert_eq!(env_parse("CATALOG_LIMIT", 7u32), Ok(12));
        });
        temp_env::with_var("CATALOG_LIMIT", Some("lots"), || {
            let err = env_parse("CATALOG_LIMIT", 7u32).unwrap_err();
            assert!(matches!(&err, ConfigError::Invalid { key, .. } if key == "CATALOG_LIMIT"));
        });
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var_unset("CATALOG_MODE", || {
            assert_eq!(env_or_default("CATALOG_MODE", "memory"), "memory");
        });
    }
}
