//! Verbosity to `tracing` level mapping

use tracing_subscriber::filter::LevelFilter;
use types::Verbosity;

/// Threshold filter for a verbosity
pub fn level_filter(verbosity: Verbosity) -> LevelFilter {
    match verbosity {
        Verbosity::Debug => LevelFilter::DEBUG,
        Verbosity::Info => LevelFilter::INFO,
        Verbosity::Warn => LevelFilter::WARN,
        Verbosity::Error => LevelFilter::ERROR,
    }
}

/// Threshold filter for a level name; unknown names map to INFO
pub fn parse_level(name: &str) -> LevelFilter {
    level_filter(Verbosity::from_name(name))
}
