//! Lab CLI - Main Application Entry Point

use anyhow::Result;
use clap::Parser;
use config::{Config, ConfigLoader};
use logging::{LoggerFactory, LoggerGuard};
use std::path::PathBuf;
use tracing::info;
use types::LabError;

/// Loads configuration, initializes logging and reports startup
#[derive(Debug, Parser)]
#[command(name = "lab_cli", version, about)]
struct Cli {
    /// Dotenv file consulted for variables not set in the environment
    /// [default: .env]
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

/// Resolve configuration and install the logger
fn init(cli: &Cli) -> types::Result<(Config, LoggerGuard)> {
    let config = match &cli.env_file {
        Some(path) => ConfigLoader::load_with_env_file(path),
        None => ConfigLoader::load(),
    }?;

    let guard = LoggerFactory::new(&config).install()?;
    Ok((config, guard))
}

/// Startup step an error came from
fn stage(err: &LabError) -> &'static str {
    match err.config_kind() {
        Some(_) => "config load",
        None => "logging init",
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, _guard) = init(&cli).map_err(|e| {
        let step = stage(&e);
        anyhow::Error::new(e).context(step)
    })?;

    info!(
        app_name = %config.app_name(),
        app_env = %config.app_env(),
        "lab_cli started"
    );

    info!("all blocks initialized successfully");
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ConfigError;

    #[test]
    fn test_env_file_is_optional() {
        let cli = Cli::try_parse_from(["lab_cli"]).unwrap();
        assert_eq!(cli.env_file, None);
    }

    #[test]
    fn test_env_file_override() {
        let cli = Cli::try_parse_from(["lab_cli", "--env-file", "config/local.env"]).unwrap();
        assert_eq!(cli.env_file, Some(PathBuf::from("config/local.env")));
    }

    #[test]
    fn test_rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["lab_cli", "--verbose"]).is_err());
    }

    #[test]
    fn test_stage_follows_error_category() {
        let config_err = LabError::from(ConfigError::invalid("LOG_LEVEL", "bad"));
        assert_eq!(stage(&config_err), "config load");

        let io = std::io::Error::new(std::io::ErrorKind::Other, "already set");
        assert_eq!(stage(&LabError::logging_init(io)), "logging init");
    }

    #[test]
    fn test_error_chain_names_key() {
        let err: LabError = ConfigError::invalid(
            "LOG_LEVEL",
            "must be one of: debug, info, warn, error",
        )
        .into();
        let step = stage(&err);
        let rendered = format!("{:#}", anyhow::Error::new(err).context(step));
        assert_eq!(
            rendered,
            "config load: config key invalid: LOG_LEVEL: must be one of: debug, info, warn, error"
        );
    }
}
