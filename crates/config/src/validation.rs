//! Configuration validation utilities

use crate::schema::LOG_LEVEL_KEY;
use types::{ConfigError, Verbosity};

/// Validate a log level name against the accepted set.
///
/// Matching is exact and case-sensitive.
pub fn validate_log_level(value: &str) -> Result<Verbosity, ConfigError> {
    Verbosity::parse(value).ok_or_else(|| {
        ConfigError::invalid(
            LOG_LEVEL_KEY,
            format!("must be one of: {}", Verbosity::allowed_values()),
        )
    })
}
