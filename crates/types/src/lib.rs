//! Shared types for the lab CLI blocks
//!
//! This crate contains the error taxonomy and the verbosity levels shared by
//! the configuration and logging blocks.

pub mod error;
pub mod verbosity;

// Re-export commonly used types
pub use error::{ConfigError, ErrorKind, LabError, Result};
pub use verbosity::Verbosity;
