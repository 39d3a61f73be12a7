//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use tool::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// The configuration could not be rendered as JSON.
    Render(serde_json::Error),

    /// I/O error while producing command output.
    Io {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

impl CliError {
    /// Get the exit code for this error.
    ///
    /// Every failure exits with 1; success (0) is not an error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(_) | CliError::Render(_) | CliError::Io { .. } => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Render(e) => write!(f, "failed to render configuration: {e}"),
            CliError::Io { path, source } => {
                write!(f, "I/O error at {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Render(e) => Some(e),
            CliError::Io { source, .. } => Some(source),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn render_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn test_every_failure_exits_with_one() {
        let errors = [
            CliError::Library(LibError::ConfigNotFound {
                path: PathBuf::from("/tmp/missing.json"),
            }),
            CliError::Render(render_error()),
            CliError::Io {
                path: PathBuf::from("dist"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        ];
        for error in &errors {
            assert_eq!(error.exit_code(), 1, "{error}");
        }
    }

    #[test]
    fn test_library_error_display_is_passed_through() {
        let error = CliError::from(LibError::ConfigNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        });
        assert_eq!(error.to_string(), "config file not found: /tmp/missing.json");
    }

    #[test]
    fn test_render_error_display_and_source() {
        let error = CliError::Render(render_error());
        assert!(error
            .to_string()
            .starts_with("failed to render configuration: "));
        assert!(error.source().is_some());
        assert_eq!(error.exit_code(), 1);
    }
}
