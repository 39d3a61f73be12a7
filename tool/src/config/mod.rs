//! Configuration resolution for tool.
//!
//! This module finds, parses and validates the configuration of a single
//! invocation:
//!
//! - [`ConfigLoader`] loads an explicitly named `.json`/`.yaml`/`.yml` file
//! - [`ConfigDiscovery`] searches upward for `.toolrc*` or a `package.json`
//!   `"tool"` key
//! - [`Schema`] is the declarative description of a valid configuration
//! - [`SchemaValidator`] reports every violation of a schema
//! - [`ConfigResolver`] ties these together and falls back to
//!   [`Configuration::default`] (`{"port": 1234}`) when nothing is found
//!
//! # Examples
//!
//! ```
//! use tool::config::{ConfigDiscovery, ConfigResolver};
//! use tool::ErrorKind;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join(".toolrc.json"), r#"{"port": "http"}"#).unwrap();
//!
//! let resolver = ConfigResolver::new()
//!     .with_working_dir(dir.path())
//!     .with_discovery(ConfigDiscovery::new("tool").with_stop_dir(dir.path()));
//!
//! let err = resolver.resolve(None).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ValidationError);
//! ```

pub mod configuration;
pub mod format;
pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use configuration::{ConfigSource, Configuration, Resolved, SourceOrigin, DEFAULT_PORT};
pub use format::ConfigFormat;
pub use loader::{Candidate, ConfigDiscovery, ConfigLoader, SearchPlace};
pub use resolver::{ConfigResolver, TOOL_NAME};
pub use schema::{JsonType, Schema, TypeSet};
pub use validator::{SchemaValidator, ValidationReport, Violation};
