//! Error types for the lab CLI blocks

use thiserror::Error;

/// Main error type for the lab CLI blocks
#[derive(Error, Debug)]
pub enum LabError {
    /// Configuration resolution errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The logger could not be installed as the process-wide default
    #[error("logging initialization failed")]
    LoggingInit {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias for lab CLI operations
pub type Result<T> = std::result::Result<T, LabError>;

/// Category of a configuration failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required setting has no value and no default
    MissingKey,
    /// A setting holds a value that fails validation
    InvalidKey,
}

/// Configuration specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Missing required key
    #[error("config key missing: {key}")]
    MissingKey { key: String },

    /// Invalid value for a key
    #[error("config key invalid: {key}: {reason}")]
    InvalidKey { key: String, reason: String },
}

impl ConfigError {
    pub fn missing(key: impl Into<String>) -> Self {
        ConfigError::MissingKey { key: key.into() }
    }

    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Category of this error, for matching without inspecting the message
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingKey { .. } => ErrorKind::MissingKey,
            ConfigError::InvalidKey { .. } => ErrorKind::InvalidKey,
        }
    }

    /// Name of the offending key
    pub fn key(&self) -> &str {
        match self {
            ConfigError::MissingKey { key } | ConfigError::InvalidKey { key, .. } => key,
        }
    }
}

impl LabError {
    pub fn logging_init<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LabError::LoggingInit {
            source: Box::new(source),
        }
    }

    /// Configuration error category, if this is a configuration error
    pub fn config_kind(&self) -> Option<ErrorKind> {
        match self {
            LabError::Config(err) => Some(err.kind()),
            LabError::LoggingInit { .. } => None,
        }
    }
}
