//! Error types for the tool library.
//!
//! Every failure of configuration resolution surfaces as a single [`Error`]
//! carrying the offending path and the underlying message. [`Error::kind`]
//! classifies it for callers that need to branch on the cause.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ValidationReport;

/// Result type alias for operations that may fail with a tool error.
///
/// # Examples
///
/// ```
/// use tool::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(1234)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tool library.
#[derive(Debug, Error)]
pub enum Error {
    /// An explicitly requested configuration file does not exist.
    #[error("config file not found: {}", path.display())]
    ConfigNotFound {
        /// The resolved absolute path that was looked up.
        path: PathBuf,
    },

    /// The configuration file has an extension that cannot be loaded.
    #[error("unsupported config file format '{extension}' ({}): {reason}", path.display())]
    UnsupportedFormat {
        /// The offending file.
        path: PathBuf,
        /// The extension as written, including the leading dot (empty if none).
        extension: String,
        /// Why the format is refused.
        reason: String,
    },

    /// The configuration file could not be parsed as its declared format.
    #[error("failed to parse {} as {format}: {message}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The format the file was parsed as.
        format: crate::config::ConfigFormat,
        /// The underlying parser message.
        message: String,
    },

    /// A candidate configuration failed schema validation.
    #[error("configuration validation failed:\n{report}")]
    Validation {
        /// Every violated constraint.
        report: ValidationReport,
    },

    /// The schema document itself is malformed.
    #[error("invalid schema: {message}")]
    InvalidSchema {
        /// Description of the problem.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The explicit configuration path does not exist.
    NotFound,
    /// The file format is unrecognized or refused.
    UnsupportedFormat,
    /// The file content is not valid for its format.
    ParseError,
    /// The candidate configuration failed the schema.
    ValidationError,
    /// The schema document is malformed.
    InvalidSchema,
    /// A path could not be interpreted.
    InvalidPath,
    /// Reading from the filesystem failed.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not-found"),
            Self::UnsupportedFormat => write!(f, "unsupported-format"),
            Self::ParseError => write!(f, "parse-error"),
            Self::ValidationError => write!(f, "validation-error"),
            Self::InvalidSchema => write!(f, "invalid-schema"),
            Self::InvalidPath => write!(f, "invalid-path"),
            Self::Io => write!(f, "io"),
        }
    }
}

impl Error {
    /// Classify this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tool::{Error, ErrorKind};
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigNotFound { path: PathBuf::from("/missing.json") };
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigNotFound { .. } => ErrorKind::NotFound,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::Parse { .. } => ErrorKind::ParseError,
            Self::Validation { .. } => ErrorKind::ValidationError,
            Self::InvalidSchema { .. } => ErrorKind::InvalidSchema,
            Self::InvalidPath { .. } => ErrorKind::InvalidPath,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Check if error indicates the configuration file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }

    /// The validation report, if this is a validation failure.
    #[must_use]
    pub fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Validation { report } => Some(report),
            _ => None,
        }
    }
}
