//! Configuration schema definitions

use crate::validation::validate_log_level;
use types::{ConfigError, Verbosity};

/// Environment key for the runtime environment
pub const APP_ENV_KEY: &str = "APP_ENV";
/// Environment key for the log verbosity
pub const LOG_LEVEL_KEY: &str = "LOG_LEVEL";
/// Environment key for the application name
pub const APP_NAME_KEY: &str = "APP_NAME";

/// Environment that selects human-readable log output
pub const DEV_ENV: &str = "dev";
pub const DEFAULT_APP_ENV: &str = DEV_ENV;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_APP_NAME: &str = "lab_cli";

/// Env file consulted by [`crate::ConfigLoader::load`]
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Application configuration.
///
/// Only constructed through [`Config::new`] (or the loader), so a `Config`
/// always holds a valid log level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Runtime environment: dev, staging, production
    app_env: String,
    /// Logging level: debug, info, warn, error
    log_level: String,
    /// Application name used in structured log output
    app_name: String,
}

impl Config {
    /// Build a configuration, validating the log level
    pub fn new(
        app_env: impl Into<String>,
        log_level: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let log_level = log_level.into();
        validate_log_level(&log_level)?;

        Ok(Self {
            app_env: app_env.into(),
            log_level,
            app_name: app_name.into(),
        })
    }

    pub fn app_env(&self) -> &str {
        &self.app_env
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Parsed log level
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.log_level)
    }

    /// Whether the runtime environment is `dev`
    pub fn is_dev(&self) -> bool {
        self.app_env == DEV_ENV
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_env: DEFAULT_APP_ENV.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.app_env(), "dev");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.app_name(), DEFAULT_APP_NAME);
        assert!(!config.app_name().is_empty());
        assert!(config.is_dev());
    }

    #[test]
    fn test_new_keeps_values() {
        let config = Config::new("test", "debug", "myapp").unwrap();
        assert_eq!(config.app_env(), "test");
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.app_name(), "myapp");
        assert_eq!(config.verbosity(), Verbosity::Debug);
        assert!(!config.is_dev());
    }

    #[test]
    fn test_new_rejects_invalid_level() {
        let err = Config::new("dev", "verbose", "myapp").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
        assert_eq!(err.key(), LOG_LEVEL_KEY);
    }
}
