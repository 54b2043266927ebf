//! Structured logging for the lab CLI
//!
//! Builds a `tracing` logger from a resolved [`config::Config`]: the log level
//! sets the verbosity threshold, the runtime environment picks text or JSON
//! output, and the application name is attached to every record.

pub mod factory;
pub mod format;
pub mod level;

pub use factory::{Logger, LoggerFactory, LoggerGuard};
pub use format::LogFormat;
pub use level::{level_filter, parse_level};
