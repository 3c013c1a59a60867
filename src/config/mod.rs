//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `JANSETU__<SECTION>__<KEY>` pattern

mod server;
mod storage;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use server::ServerConfig;
pub use storage::{FileStorageConfig, StorageConfig};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Storage backend configuration.
    pub storage: StorageConfig,

    /// Authentication configuration.
    pub auth: AuthConfig,

    /// Observability configuration.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources
    /// override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{JANSETU_PROFILE}.toml` (if `JANSETU_PROFILE` is set)
    /// 3. Environment variables with `JANSETU__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let profile =
            std::env::var("JANSETU_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // JANSETU__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("JANSETU")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        if self.auth.admin_token.is_empty() {
            return Err(ConfigError::Message(
                "auth.admin_token cannot be empty".to_string(),
            ));
        }

        if self.auth.session_expiration == 0 {
            return Err(ConfigError::Message(
                "auth.session_expiration cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Admin service-account token for seeding and user lookup APIs.
    #[serde(default = "default_admin_token")]
    pub admin_token: String,

    /// Session token expiration in seconds.
    #[serde(default = "default_session_expiration")]
    pub session_expiration: u64,
}

fn default_admin_token() -> String {
    "admin_change_me_in_production".to_string()
}

const fn default_session_expiration() -> u64 {
    7 * 24 * 60 * 60 // 7 days
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_token: default_admin_token(),
            session_expiration: default_session_expiration(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.storage.file.data_dir,
            std::path::PathBuf::from("./data")
        );
        assert_eq!(config.auth.session_expiration, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_validation_rejects_empty_admin_token() {
        let mut config = AppConfig::default();
        config.auth.admin_token = String::new();
        assert!(config.validate().is_err());
    }
}
