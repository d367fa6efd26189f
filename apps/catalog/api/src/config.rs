//! Configuration for Catalog API

use core_config::{AppInfo, FromEnv, app_info, env_bool, server::ServerConfig};

pub use core_config::Environment;

/// Product store settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Start with the default catalog instead of an empty store
    pub seed: bool,
}

impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, core_config::ConfigError> {
        Ok(Self {
            seed: env_bool("CATALOG_SEED", true)?,
        })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        server.check_for(&environment)?;
        let catalog = CatalogConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("PORT", None),
                ("CORS_ALLOWED_ORIGIN", None),
                ("CATALOG_SEED", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.port, 3000);
                assert!(config.catalog.seed);
                assert_eq!(config.app.name, "catalog_api");
            },
        );
    }

    #[test]
    fn test_seed_can_be_disabled() {
        temp_env::with_vars([("CATALOG_SEED", Some("false"))], || {
            let config = Config::from_env().unwrap();
            assert!(!config.catalog.seed);
        });
    }

    #[test]
    fn test_invalid_seed_flag_is_an_error() {
        temp_env::with_vars([("CATALOG_SEED", Some("sometimes"))], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_production_requires_cors_origin() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("CORS_ALLOWED_ORIGIN", None),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
            },
        );

        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("CORS_ALLOWED_ORIGIN", Some("https://shop.example.com")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.server.cors_allowed_origins,
                    vec!["https://shop.example.com".to_string()]
                );
            },
        );
    }
}
