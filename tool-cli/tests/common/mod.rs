//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate configuration discovery
//! - Helpers for writing configuration and schema files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working and home directory.
///
/// Commands run with the temporary directory as both the working directory
/// and `HOME`, so discovery never sees files outside the test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the environment's root directory.
    pub fn command(&self) -> Command {
        self.command_in(&self.temp_path)
    }

    /// Get a command builder running in `dir`.
    ///
    /// Configuration-related environment variables are cleared so the
    /// caller's shell cannot leak into the test.
    pub fn command_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("tool").expect("Failed to find tool binary");
        cmd.current_dir(dir)
            .env("HOME", &self.temp_path)
            .env_remove("TOOL_CONFIG")
            .env_remove("TOOL_SCHEMA")
            .env_remove("TOOL_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write `contents` to `name` under the environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

/// Parse the JSON printed after `Current configuration:`.
#[allow(dead_code)]
pub fn shown_configuration(stdout: &[u8]) -> serde_json::Value {
    let stdout = String::from_utf8(stdout.to_vec()).expect("Invalid UTF-8 in output");
    let json = stdout
        .split_once("Current configuration:")
        .map(|(_, rest)| rest)
        .expect("Missing configuration header");
    serde_json::from_str(json.trim()).expect("Output is not valid JSON")
}
