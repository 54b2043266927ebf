//! Logger construction and installation

use crate::format::LogFormat;
use crate::level::level_filter;
use config::Config;
use std::io::{self, IsTerminal};
use tracing::dispatcher::{self, Dispatch};
use tracing::span::EnteredSpan;
use tracing::Span;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use types::{LabError, Verbosity};

/// Builds loggers from resolved configuration
pub struct LoggerFactory;

impl LoggerFactory {
    /// Logger writing to standard error
    pub fn new(config: &Config) -> Logger {
        Self::build(config, io::stderr, io::stderr().is_terminal())
    }

    /// Logger writing to an arbitrary sink, without ANSI colours
    pub fn with_writer<W>(config: &Config, writer: W) -> Logger
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(config, writer, false)
    }

    fn build<W>(config: &Config, writer: W, ansi: bool) -> Logger
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let level = level_filter(config.verbosity());
        let format = LogFormat::for_environment(config.app_env());

        let dispatch = match format {
            LogFormat::Text => Dispatch::new(
                tracing_subscriber::fmt()
                    .with_writer(writer)
                    .with_max_level(level)
                    .with_ansi(ansi)
                    .with_target(true)
                    .finish(),
            ),
            LogFormat::Json => Dispatch::new(
                tracing_subscriber::fmt()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(writer)
                    .with_max_level(level)
                    .with_target(true)
                    .finish(),
            ),
        };

        // ERROR level keeps the span enabled under every threshold
        let span = dispatcher::with_default(&dispatch, || {
            tracing::error_span!("app", app = %config.app_name())
        });

        Logger {
            dispatch,
            span,
            format,
            level,
        }
    }
}

/// A leveled structured logger bound to the application name.
///
/// Records emitted inside [`Logger::in_scope`], or anywhere on the installing
/// thread after [`Logger::install`], carry the `app` field.
#[derive(Debug, Clone)]
pub struct Logger {
    dispatch: Dispatch,
    span: Span,
    format: LogFormat,
    level: LevelFilter,
}

impl Logger {
    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Verbosity threshold; records below it are dropped
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Run `f` with this logger as the thread's default
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, || self.span.in_scope(f))
    }

    /// Emit a single message at a runtime-selected level
    pub fn log(&self, level: Verbosity, message: &str) {
        self.in_scope(|| match level {
            Verbosity::Debug => tracing::debug!("{}", message),
            Verbosity::Info => tracing::info!("{}", message),
            Verbosity::Warn => tracing::warn!("{}", message),
            Verbosity::Error => tracing::error!("{}", message),
        })
    }

    /// Make this the process-wide logger and enter the root span on the
    /// current thread for as long as the guard lives.
    ///
    /// Fails if a global logger is already set.
    pub fn install(self) -> Result<LoggerGuard, LabError> {
        dispatcher::set_global_default(self.dispatch.clone()).map_err(LabError::logging_init)?;

        let entered = self.span.clone().entered();
        Ok(LoggerGuard {
            _entered: entered,
            _logger: self,
        })
    }
}

/// Keeps the root span entered; dropping it exits the span
#[must_use = "dropping the guard detaches the app field from later records"]
pub struct LoggerGuard {
    _entered: EnteredSpan,
    _logger: Logger,
}
