//! The resolved configuration and where it came from.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::format::ConfigFormat;

/// Port used when no configuration source exists.
pub const DEFAULT_PORT: u16 = 1234;

/// A validated configuration: a mapping from option name to value.
///
/// Fields the schema does not describe are kept verbatim, so a configuration
/// read from disk serializes back to the same document.
///
/// # Examples
///
/// ```
/// use tool::Configuration;
///
/// let config = Configuration::default();
/// assert_eq!(config.port(), Some(1234));
/// assert_eq!(config.to_string(), r#"{"port":1234}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Default for Configuration {
    fn default() -> Self {
        let mut map = Map::new();
        map.insert("port".to_string(), Value::from(DEFAULT_PORT));
        Self(map)
    }
}

impl Configuration {
    /// Wrap an already-validated map.
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// The `port` option, if present and an integer.
    #[must_use]
    pub fn port(&self) -> Option<i64> {
        self.0.get("port").and_then(Value::as_i64)
    }

    /// Override the `port` option.
    pub fn set_port(&mut self, port: u16) {
        self.0.insert("port".to_string(), Value::from(port));
    }

    /// Look up an arbitrary option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for Configuration {
    type Error = Value;

    /// Succeeds only for JSON objects; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

impl From<Configuration> for Value {
    fn from(config: Configuration) -> Self {
        config.into_value()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// How a configuration file was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Named directly by the caller.
    Explicit,
    /// Found by searching upward from the working directory.
    Discovered,
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::Discovered => write!(f, "discovered"),
        }
    }
}

/// A configuration file together with how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Whether the file was named or discovered.
    pub origin: SourceOrigin,
    /// Format the file was parsed as.
    pub format: ConfigFormat,
}

/// Outcome of a resolution: the configuration and its source.
///
/// `source` is `None` when no file was found and the default was used.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The validated configuration.
    pub config: Configuration,
    /// Where it was read from.
    pub source: Option<ConfigSource>,
}

impl Resolved {
    /// Whether the built-in default was returned.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.source.is_none()
    }
}
