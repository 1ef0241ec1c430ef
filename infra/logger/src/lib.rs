//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for harness binaries and tests.
//! Console output is compact and colored; an optional rolling log file is written
//! through a non-blocking worker, as plain text or JSON.
//!
//! Filtering starts from [`LoggerBuilder::level`], can be refined with
//! [`LoggerBuilder::env_filter`] and is overridden by `RUST_LOG` when no explicit
//! filter is given.
//!
//! ## Example
//!
//! ```rust
//! # use interop_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("prov-interop")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct FileSink {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileSink>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);

/// A builder for the global tracing subscriber.
///
/// A name is required before [`init`](LoggerBuilder::init).
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { config: self.config, name: Named(name.into()) }
    }
}

impl<N> LoggerBuilder<N> {
    /// Minimum level emitted when no filter directive says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit filter (e.g., `interop_kernel=debug`), taking precedence over `RUST_LOG`.
    ///
    /// Invalid filters make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables console output.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes logs into `dir` as daily-rotated files.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.file = Some(FileSink {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Rotation strategy of the log file. No effect without [`path`](Self::path).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Number of rotated files kept. No effect without [`path`](Self::path).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Writes the log file as JSON lines. No effect without [`path`](Self::path).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn json(mut self, enabled: bool) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.json = enabled;
        }
        self
    }
}

impl LoggerBuilder<Named> {
    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's [`WorkerGuard`]; keep it
    /// alive until shutdown so buffered lines are flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   an unparsable filter or when no output is enabled.
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] when the log file cannot be set up.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: Named(name) } = self;
        validate(&config, &name)?;

        let filter = build_env_filter(&config)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match config.file {
            Some(file) => {
                let (file_layer, guard) = file_layer(&name, file)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

fn file_layer(name: &str, file: FileSink) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&file.dir)
        .context(format!("Failed to create log directory: {}", file.dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = if file.json { base.json().boxed() } else { base.boxed() };

    Ok((boxed, guard))
}

/// Handle to the installed logging system.
///
/// Holds the background writer guard, if file output is enabled.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use interop_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("prov-interop")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: Unnamed }
    }

    /// Whether log lines are also written to a file.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers");
        }
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.file.as_ref().is_some_and(|file| file.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{filter}': {e}").into(),
            context: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("harness").env_filter("interop_kernel=debug");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("interop_kernel=debug"));
        assert!(builder.config.file.is_none());
    }

    #[test]
    fn file_options_need_a_path() {
        let builder = Logger::builder().name("harness").json(true).max_files(3);
        assert!(builder.config.file.is_none());

        let builder = Logger::builder().name("harness").path("logs").json(true).max_files(3);
        let file = builder.config.file.expect("file sink configured");
        assert!(file.json);
        assert_eq!(file.max_files, 3);
        assert_eq!(file.dir, PathBuf::from("logs"));
    }

    #[test]
    fn rejects_blank_name_and_zero_files() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let builder = Logger::builder().name("harness").path("logs").max_files(0);
        let err = builder.init().expect_err("zero files");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn rejects_invalid_filter_and_no_output() {
        let err =
            Logger::builder().name("harness").env_filter("[[[").init().expect_err("bad filter");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("harness").console(false).init().expect_err("no output");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
