//! Configuration loader implementation

use crate::schema::{
    Config, APP_ENV_KEY, APP_NAME_KEY, DEFAULT_APP_ENV, DEFAULT_APP_NAME, DEFAULT_ENV_FILE,
    DEFAULT_LOG_LEVEL, LOG_LEVEL_KEY,
};
use crate::source::{EnvFile, EnvSource, Layered, ProcessEnv};
use std::path::Path;
use tracing::debug;
use types::ConfigError;

/// Configuration loader that resolves settings from key/value sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment, falling back to a
    /// `.env` file in the working directory, then defaults
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_with_env_file(DEFAULT_ENV_FILE)
    }

    /// Load configuration from the process environment, falling back to the
    /// given env file, then defaults.
    ///
    /// The env file is optional; it never overrides a variable already set in
    /// the process environment.
    pub fn load_with_env_file<P: AsRef<Path>>(env_file: P) -> Result<Config, ConfigError> {
        Self::load_from(ProcessEnv, env_file)
    }

    /// Load configuration from `primary`, falling back to the given env file,
    /// then defaults
    pub fn load_from<S, P>(primary: S, env_file: P) -> Result<Config, ConfigError>
    where
        S: EnvSource,
        P: AsRef<Path>,
    {
        let file = EnvFile::read(env_file);
        if let Some(path) = file.path() {
            debug!(path = %path.display(), vars = file.len(), "loaded env file");
        }

        Self::resolve(&Layered::new(primary, file))
    }

    /// Resolve and validate configuration from a single source
    pub fn resolve<S: EnvSource>(source: &S) -> Result<Config, ConfigError> {
        let app_env = Self::get_or_default(source, APP_ENV_KEY, DEFAULT_APP_ENV);
        let log_level = Self::get_or_default(source, LOG_LEVEL_KEY, DEFAULT_LOG_LEVEL);
        let app_name = Self::get_or_default(source, APP_NAME_KEY, DEFAULT_APP_NAME);

        Config::new(app_env, log_level, app_name)
    }

    /// Present, non-empty values are used verbatim
    fn get_or_default<S: EnvSource>(source: &S, key: &str, default: &str) -> String {
        match source.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                debug!(key, default, "using default");
                default.to_string()
            }
        }
    }
}
