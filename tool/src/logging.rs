//! Logging infrastructure for the tool library.
//!
//! Components log through a [`Logger`] bound to a namespace such as
//! `config:resolver`. Records go through the `log` facade with the namespace
//! as their target, so the binary decides where (and whether) they appear.

use std::env;
use std::fmt;

use log::LevelFilter;

/// Environment variable consulted by [`select_log_level`].
pub const LOG_MODE_ENV: &str = "TOOL_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use tool::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all log output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including info and debug records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use tool::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter corresponding to this level.
    #[must_use]
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A namespaced logger.
///
/// The namespace becomes the `log` record target, so output from different
/// components can be told apart and filtered.
///
/// # Examples
///
/// ```
/// use tool::Logger;
///
/// let logger = Logger::new("commands:start");
/// assert_eq!(logger.namespace(), "commands:start");
/// logger.warn("no records are emitted until a log backend is installed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    namespace: String,
}

impl Logger {
    /// Creates a logger for the given namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Returns the namespace this logger writes under.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) {
        log::error!(target: self.namespace.as_str(), "{message}");
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        log::warn!(target: self.namespace.as_str(), "{message}");
    }

    /// Logs an informational message.
    pub fn info(&self, message: &str) {
        log::info!(target: self.namespace.as_str(), "{message}");
    }

    /// Logs a debug message.
    pub fn debug(&self, message: &str) {
        log::debug!(target: self.namespace.as_str(), "{message}");
    }
}

/// Selects the log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `TOOL_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use tool::{select_log_level, LogLevel};
///
/// assert_eq!(select_log_level(true, false), LogLevel::Verbose);
/// assert_eq!(select_log_level(false, true), LogLevel::Quiet);
/// ```
#[must_use]
pub fn select_log_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}
