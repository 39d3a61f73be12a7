#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tool
//!
//! Configuration resolution for the `tool` command-line program.
//!
//! A configuration is located (an explicit path, or a `.toolrc*` file or
//! `package.json` key found by walking up from the working directory),
//! parsed according to its format, and validated against a declarative
//! schema. When nothing is found, the default `{"port": 1234}` is used.
//!
//! ## Core Types
//!
//! - [`ConfigResolver`]: the resolution pipeline
//! - [`Configuration`]: a validated option map
//! - [`Schema`] and [`SchemaValidator`]: declarative validation
//! - [`Error`], [`ErrorKind`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: namespaced logging
//!
//! ## Examples
//!
//! ```
//! use tool::{ConfigResolver, Configuration};
//! use tool::config::ConfigDiscovery;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join(".toolrc.yaml"), "port: 3000\nname: demo\n").unwrap();
//!
//! let config = ConfigResolver::new()
//!     .with_working_dir(dir.path())
//!     .with_discovery(ConfigDiscovery::new("tool").with_stop_dir(dir.path()))
//!     .resolve(None)
//!     .unwrap();
//!
//! assert_eq!(config.port(), Some(3000));
//! assert_eq!(config.get("name").and_then(|v| v.as_str()), Some("demo"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigResolver, Configuration, Resolved, Schema, SchemaValidator};
pub use error::{Error, ErrorKind, Result};
pub use logging::{select_log_level, LogLevel, Logger};
