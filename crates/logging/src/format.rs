//! Output format selection

use config::DEV_ENV;
use std::fmt;

/// How log records are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per record
    Json,
}

impl LogFormat {
    /// `dev` gets text output, every other environment gets JSON
    pub fn for_environment(app_env: &str) -> Self {
        if app_env == DEV_ENV {
            LogFormat::Text
        } else {
            LogFormat::Json
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_selects_text() {
        assert_eq!(LogFormat::for_environment("dev"), LogFormat::Text);
    }

    #[test]
    fn test_other_environments_select_json() {
        for env in ["", "production", "staging", "Dev", "dev ", "development"] {
            assert_eq!(LogFormat::for_environment(env), LogFormat::Json, "env {env:?}");
        }
    }
}
