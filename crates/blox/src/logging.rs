//! Structured logging for blx.
//!
//! Log lines go to stderr so they never mix with the rendered table on
//! stdout. The level comes from `BLOX_LOG` (EnvFilter syntax) when set,
//! otherwise from the `-v` count. Both are read before settings are
//! resolved, so the subscriber sees argument splitting and settings events.
//!
//! Cell contents are only ever logged at `trace`.

use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{split_args, Cli};
use crate::config::{ENV_LOG, ENV_NO_COLOR};
use crate::env::EnvReader;

/// Global flag to track if logging has been initialized
static LOGGING_INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives that replace the verbosity level, e.g.
    /// `blox_table=debug,warn`.
    pub filter: Option<String>,
    /// Number of `-v` flags.
    pub verbosity: u8,
    /// Color log lines.
    pub ansi: bool,
}

impl LogConfig {
    /// Reads `-v`, `--no-color`, `BLOX_LOG` and `NO_COLOR` from raw
    /// arguments (without the program name). Flags that fail to parse count
    /// as none; the parse error is reported later by the app.
    pub fn from_args(args: &[String], env: &dyn EnvReader, stderr_is_tty: bool) -> Self {
        let flags = split_args(args.iter().cloned()).flags;
        let (verbosity, no_color) = Cli::parse_flags(&flags)
            .map(|cli| (cli.verbose, cli.no_color))
            .unwrap_or_default();

        LogConfig {
            filter: env.var(ENV_LOG).filter(|v| !v.trim().is_empty()),
            verbosity,
            ansi: stderr_is_tty && !no_color && env.var(ENV_NO_COLOR).is_none(),
        }
    }

    /// Level implied by the `-v` count.
    pub fn level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Builds the filter, falling back to the verbosity level when the
    /// configured directives do not parse.
    pub fn env_filter(&self) -> EnvFilter {
        match &self.filter {
            Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|err| {
                eprintln!("warning: ignoring invalid BLOX_LOG value {directives:?}: {err}");
                EnvFilter::new(self.level())
            }),
            None => EnvFilter::new(self.level()),
        }
    }
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("logging already initialized")]
    AlreadyInitialized,

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs the global subscriber.
///
/// Subsequent calls return `Err(LogError::AlreadyInitialized)`.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Err(LogError::AlreadyInitialized);
    }

    let subscriber = tracing_subscriber::registry().with(config.env_filter()).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time()
            .with_ansi(config.ansi),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    let _ = LOGGING_INITIALIZED.set(true);

    tracing::debug!(
        level = config.level(),
        filter = ?config.filter,
        "logging initialized"
    );
    Ok(())
}
