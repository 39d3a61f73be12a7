//! Integration tests for error handling and exit codes.
//!
//! Every failure exits with code 1 and prints `Error: <message>` to stderr;
//! success, `--help` and `--version` exit with 0.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

/// Test that successful operations return exit code 0.
#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();

    env.command().arg("start").assert().code(0);
    env.command().arg("build").assert().code(0);
    env.command().args(["config", "--show"]).assert().code(0);
}

// ============================================================================
// Configuration Failures (Exit Code 1)
// ============================================================================

/// Test that a missing explicit config reports the absolute path.
#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();
    let expected = env.path().join("nonexistent.json");

    env.command()
        .args(["--config", "nonexistent.json", "start"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: config file not found"))
        .stderr(predicate::str::contains(expected.display().to_string()));
}

/// Test that an unsupported extension fails.
#[test]
fn test_unsupported_config_format() {
    let env = TestEnv::new();
    env.write_file("config.txt", "port = 5000");

    env.command()
        .args(["--config", "config.txt", "config", "--show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported config file format '.txt'"));
}

/// Test that JavaScript configuration files are refused.
#[test]
fn test_code_module_config_refused() {
    let env = TestEnv::new();
    env.write_file("tool.config.js", "module.exports = { port: 5000 };");

    env.command()
        .args(["--config", "tool.config.js", "start"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("convert it to JSON or YAML"));
}

/// Test that a discovered JavaScript configuration is refused too.
#[test]
fn test_discovered_code_module_refused() {
    let env = TestEnv::new();
    env.write_file(".toolrc.js", "module.exports = { port: 5000 };");

    env.command()
        .arg("start")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: unsupported config file format"));
}

/// Test that malformed JSON reports a parse error.
#[test]
fn test_malformed_config() {
    let env = TestEnv::new();
    env.write_file("broken.json", "{ \"port\": 5000,");

    env.command()
        .args(["--config", "broken.json", "config", "--validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to parse"))
        .stderr(predicate::str::contains("as JSON"));
}

/// Test that a package.json that does not parse stops discovery.
#[test]
fn test_malformed_package_json() {
    let env = TestEnv::new();
    env.write_file("package.json", "{ not json");

    env.command()
        .arg("start")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("as package.json"));
}

// ============================================================================
// Argument Errors (Exit Code 1)
// ============================================================================

/// Test that unknown flags exit with 1.
#[test]
fn test_unknown_flag() {
    let env = TestEnv::new();

    env.command()
        .args(["build", "--fast"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--fast"));
}

/// Test that a missing option value exits with 1.
#[test]
fn test_missing_option_value() {
    let env = TestEnv::new();

    env.command().args(["start", "--port"]).assert().code(1);
}
