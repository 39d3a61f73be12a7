//! Configuration file formats.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// The format a configuration file is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// A JSON document.
    Json,
    /// A YAML document (also accepts JSON, which YAML subsumes).
    Yaml,
    /// A `package.json` manifest carrying the configuration under a key.
    PackageJson,
    /// A code module whose export would be the configuration. Never loaded.
    Module,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
            Self::PackageJson => write!(f, "package.json"),
            Self::Module => write!(f, "JavaScript module"),
        }
    }
}

impl ConfigFormat {
    /// Infer the format from a file extension.
    ///
    /// Returns `None` for unknown or missing extensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use tool::config::ConfigFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ConfigFormat::from_extension(Path::new("a.json")), Some(ConfigFormat::Json));
    /// assert_eq!(ConfigFormat::from_extension(Path::new("a.YML")), Some(ConfigFormat::Yaml));
    /// assert_eq!(ConfigFormat::from_extension(Path::new("a.js")), Some(ConfigFormat::Module));
    /// assert_eq!(ConfigFormat::from_extension(Path::new("a.txt")), None);
    /// ```
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "js" | "cjs" | "mjs" => Some(Self::Module),
            _ => None,
        }
    }

    /// Parse file contents in this format.
    ///
    /// For [`ConfigFormat::PackageJson`] this returns the whole manifest;
    /// extracting the tool's key is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the contents are malformed, and
    /// [`Error::UnsupportedFormat`] for code modules.
    pub fn parse(self, path: &Path, contents: &str) -> Result<Value> {
        let parsed = match self {
            Self::Json | Self::PackageJson => {
                serde_json::from_str(contents).map_err(|e| e.to_string())
            }
            Self::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Self::Module => return Err(module_refused(path)),
        };

        parsed.map_err(|message| Error::Parse {
            path: path.to_path_buf(),
            format: self,
            message,
        })
    }
}

/// The extension of `path` as written, with its leading dot.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Error for a configuration file that would have to be executed.
pub(crate) fn module_refused(path: &Path) -> Error {
    Error::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: extension_of(path),
        reason: "code modules are not evaluated as configuration; convert it to JSON or YAML"
            .to_string(),
    }
}
