//! Configuration file discovery and loading.
//!
//! An explicit path is loaded by extension. Without one, [`ConfigDiscovery`]
//! walks from the working directory toward the root and takes the first
//! conventional file it finds:
//!
//! 1. `package.json` with a `"<name>"` key
//! 2. `.<name>rc` (YAML or JSON)
//! 3. `.<name>rc.json`
//! 4. `.<name>rc.yaml`
//! 5. `.<name>rc.yml`
//! 6. `.<name>rc.js`, `.<name>rc.cjs`, `<name>.config.js`, `<name>.config.cjs`
//!
//! Empty files are skipped. Code modules are recognized but refused.
//! The walk ends after the stop directory (the home directory by default).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::configuration::{ConfigSource, SourceOrigin};
use crate::config::format::{extension_of, module_refused, ConfigFormat};
use crate::error::{Error, Result};

/// A parsed but not yet validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The parsed document.
    pub value: Value,
    /// Where it came from.
    pub source: ConfigSource,
}

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load an explicitly named configuration file.
    ///
    /// `path` should already be absolute; it is reported verbatim in errors.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] if nothing exists at `path`
    /// - [`Error::UnsupportedFormat`] for unknown extensions and code modules
    /// - [`Error::Parse`] if the content is malformed
    /// - [`Error::Io`] if the file cannot be read
    pub fn load_explicit(path: &Path) -> Result<Candidate> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = ConfigFormat::from_extension(path).ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension_of(path),
            reason: "supported formats are .json, .yaml and .yml".to_string(),
        })?;
        if format == ConfigFormat::Module {
            return Err(module_refused(path));
        }

        let contents = Self::read_file(path)?;
        let value = format.parse(path, &contents)?;

        Ok(Candidate {
            value,
            source: ConfigSource {
                path: path.to_path_buf(),
                origin: SourceOrigin::Explicit,
                format,
            },
        })
    }

    /// Read a file to a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file is missing and
    /// [`Error::Io`] for any other read failure.
    pub fn read_file(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }
}

/// A file name tried in every directory during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlace {
    /// File name relative to the directory being searched.
    pub file_name: String,
    /// Format the file is read as.
    pub format: ConfigFormat,
}

impl SearchPlace {
    fn new(file_name: String, format: ConfigFormat) -> Self {
        Self { file_name, format }
    }
}

/// Searches ancestor directories for a conventional configuration file.
///
/// # Examples
///
/// ```
/// use tool::config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new("tool").with_stop_dir("/");
/// let places: Vec<_> = discovery
///     .search_places()
///     .into_iter()
///     .map(|p| p.file_name)
///     .collect();
/// assert_eq!(places[0], "package.json");
/// assert_eq!(places[1], ".toolrc");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    name: String,
    stop_dir: Option<PathBuf>,
}

impl ConfigDiscovery {
    /// Discovery for `name`, stopping at the user's home directory.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stop_dir: home::home_dir(),
        }
    }

    /// Stop the upward walk after `dir`.
    #[must_use]
    pub fn with_stop_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stop_dir = Some(dir.into());
        self
    }

    /// The tool name files are looked up by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The last directory examined, if any.
    #[must_use]
    pub fn stop_dir(&self) -> Option<&Path> {
        self.stop_dir.as_deref()
    }

    /// File names tried in each directory, in order.
    #[must_use]
    pub fn search_places(&self) -> Vec<SearchPlace> {
        let name = &self.name;
        vec![
            SearchPlace::new("package.json".to_string(), ConfigFormat::PackageJson),
            SearchPlace::new(format!(".{name}rc"), ConfigFormat::Yaml),
            SearchPlace::new(format!(".{name}rc.json"), ConfigFormat::Json),
            SearchPlace::new(format!(".{name}rc.yaml"), ConfigFormat::Yaml),
            SearchPlace::new(format!(".{name}rc.yml"), ConfigFormat::Yaml),
            SearchPlace::new(format!(".{name}rc.js"), ConfigFormat::Module),
            SearchPlace::new(format!(".{name}rc.cjs"), ConfigFormat::Module),
            SearchPlace::new(format!("{name}.config.js"), ConfigFormat::Module),
            SearchPlace::new(format!("{name}.config.cjs"), ConfigFormat::Module),
        ]
    }

    /// Search from `start_dir` upward.
    ///
    /// Returns `Ok(None)` if no directory up to the stop directory holds a
    /// usable configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a matching file is a code module, cannot be read,
    /// or does not parse.
    pub fn search(&self, start_dir: &Path) -> Result<Option<Candidate>> {
        let places = self.search_places();
        let mut current = start_dir.to_path_buf();

        loop {
            for place in &places {
                let path = current.join(&place.file_name);
                if !path.is_file() {
                    continue;
                }
                if let Some(value) = self.load_place(&path, place.format)? {
                    return Ok(Some(Candidate {
                        value,
                        source: ConfigSource {
                            path,
                            origin: SourceOrigin::Discovered,
                            format: place.format,
                        },
                    }));
                }
            }

            // Stop after the stop directory or at the root
            if self.stop_dir.as_deref() == Some(current.as_path()) || !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Load one discovered file; `None` means "keep searching".
    fn load_place(&self, path: &Path, format: ConfigFormat) -> Result<Option<Value>> {
        if format == ConfigFormat::Module {
            return Err(module_refused(path));
        }

        let contents = ConfigLoader::read_file(path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let value = format.parse(path, &contents)?;
        if format != ConfigFormat::PackageJson {
            return Ok(Some(value));
        }

        Ok(match value {
            Value::Object(mut manifest) => manifest.remove(&self.name).filter(|v| !v.is_null()),
            _ => None,
        })
    }
}
