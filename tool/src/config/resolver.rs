//! Configuration resolution.
//!
//! [`ConfigResolver`] turns an optional explicit path into a validated
//! [`Configuration`]: load the named file or discover one, validate it against
//! the schema, and fall back to the default when there is nothing to load.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::configuration::{Configuration, Resolved};
use crate::config::loader::{ConfigDiscovery, ConfigLoader};
use crate::config::schema::Schema;
use crate::config::validator::{SchemaValidator, ValidationReport, Violation};
use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::path::absolutize;

/// Name used for discovered file names and the `package.json` key.
pub const TOOL_NAME: &str = "tool";

/// Resolves the configuration for one invocation.
///
/// # Examples
///
/// ```
/// use tool::config::{ConfigDiscovery, ConfigResolver};
/// use tool::Configuration;
/// use std::path::Path;
///
/// let dir = tempfile::tempdir().unwrap();
/// let resolver = ConfigResolver::new()
///     .with_working_dir(dir.path())
///     .with_discovery(ConfigDiscovery::new("tool").with_stop_dir(dir.path()));
///
/// // Nothing to discover: the default comes back
/// assert_eq!(resolver.resolve(None).unwrap(), Configuration::default());
///
/// std::fs::write(dir.path().join("custom.json"), r#"{"port": 5000}"#).unwrap();
/// let config = resolver.resolve(Some(Path::new("custom.json"))).unwrap();
/// assert_eq!(config.port(), Some(5000));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    working_dir: Option<PathBuf>,
    schema: Schema,
    discovery: ConfigDiscovery,
    logger: Logger,
    default: Configuration,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// A resolver with the built-in schema, discovery for [`TOOL_NAME`], and
    /// the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            working_dir: None,
            schema: Schema::builtin(),
            discovery: ConfigDiscovery::new(TOOL_NAME),
            logger: Logger::new("config:resolver"),
            default: Configuration::default(),
        }
    }

    /// Resolve relative paths and start discovery from `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Validate against `schema` instead of the built-in one.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Replace the discovery settings.
    #[must_use]
    pub fn with_discovery(mut self, discovery: ConfigDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Log through `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Return `default` when nothing is found.
    #[must_use]
    pub fn with_default(mut self, default: Configuration) -> Self {
        self.default = default;
        self
    }

    /// The schema candidates are validated against.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// See [`ConfigResolver::resolve_source`].
    pub fn resolve(&self, explicit_path: Option<&Path>) -> Result<Configuration> {
        self.resolve_source(explicit_path).map(|resolved| resolved.config)
    }

    /// Resolve the configuration and report where it came from.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] if `explicit_path` does not exist
    /// - [`Error::UnsupportedFormat`] for unloadable file types
    /// - [`Error::Parse`] for malformed content
    /// - [`Error::Validation`] if the candidate fails the schema
    pub fn resolve_source(&self, explicit_path: Option<&Path>) -> Result<Resolved> {
        let working_dir = self.working_dir()?;

        let candidate = match explicit_path {
            Some(path) => {
                let full_path = absolutize(path, &working_dir)?;
                self.logger
                    .debug(&format!("Loading configuration from {}", full_path.display()));
                Some(ConfigLoader::load_explicit(&full_path)?)
            }
            None => self.discovery.search(&working_dir)?,
        };

        let Some(candidate) = candidate else {
            self.logger.warn("Could not find configuration, using default");
            return Ok(Resolved {
                config: self.default.clone(),
                source: None,
            });
        };

        let report = SchemaValidator::validate(&self.schema, &candidate.value);
        if !report.is_empty() {
            self.logger.error(&format!(
                "Invalid configuration was supplied in {}",
                candidate.source.path.display()
            ));
            for violation in &report {
                self.logger.error(&format!("  {violation}"));
            }
            return Err(Error::Validation { report });
        }

        let config = Configuration::try_from(candidate.value).map_err(|value| {
            Error::Validation {
                report: ValidationReport::new(vec![Violation::new(
                    "",
                    "type",
                    "configuration must be an object",
                    Some(value),
                )]),
            }
        })?;

        self.logger.debug(&format!(
            "Found configuration in {} ({}): {config}",
            candidate.source.path.display(),
            candidate.source.origin
        ));

        Ok(Resolved {
            config,
            source: Some(candidate.source),
        })
    }

    fn working_dir(&self) -> Result<PathBuf> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => env::current_dir().map_err(|source| Error::Io {
                path: PathBuf::from("."),
                source,
            }),
        }
    }
}
