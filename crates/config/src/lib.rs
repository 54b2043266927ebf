//! Configuration management for the lab CLI
//!
//! This crate resolves the application settings from an injected key/value
//! source (process environment, `.env` file, or an in-memory map), applies
//! defaults and validates the result.

pub mod loader;
pub mod schema;
pub mod source;
pub mod validation;

pub use loader::ConfigLoader;
pub use schema::*;
pub use source::{EnvFile, EnvSource, Layered, ProcessEnv};
pub use validation::*;
