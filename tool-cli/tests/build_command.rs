//! Integration tests for the build command.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::fs;

const BUILD_FILES: [&str; 3] = ["index.html", "app.js", "styles.css"];

/// Test that build writes every file into `dist` by default.
#[test]
fn test_build_default_output() {
    let env = TestEnv::new();

    env.command()
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Build completed successfully!"))
        .stdout(predicate::str::contains("Files created: 3"))
        .stdout(predicate::str::contains("Minification enabled").not());

    for name in BUILD_FILES {
        let contents = fs::read_to_string(env.path().join("dist").join(name)).unwrap();
        assert_eq!(contents, format!("// Built file: {name}\n// Minified: No\n"));
    }
}

/// Test that --output and --minify are applied.
#[test]
fn test_build_custom_output_minified() {
    let env = TestEnv::new();

    env.command()
        .args(["build", "--output", "out/web", "--minify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minification enabled"));

    let output = env.path().join("out").join("web");
    for name in BUILD_FILES {
        let contents = fs::read_to_string(output.join(name)).unwrap();
        assert_eq!(contents, format!("// Built file: {name}\n// Minified: Yes\n"));
    }
}

/// Test that the output directory is resolved against the working directory.
#[test]
fn test_build_output_reported_as_absolute_path() {
    let env = TestEnv::new();
    let project = env.create_dir("project");

    env.command_in(&project)
        .args(["build", "-o", "build"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            project.join("build").display().to_string(),
        ));

    assert!(project.join("build").join("index.html").is_file());
}

/// Test that rebuilding overwrites earlier output.
#[test]
fn test_build_overwrites_previous_output() {
    let env = TestEnv::new();

    env.command().args(["build", "--minify"]).assert().success();
    env.command().arg("build").assert().success();

    let contents = fs::read_to_string(env.path().join("dist").join("app.js")).unwrap();
    assert!(contents.contains("Minified: No"));
}

/// Test that an unwritable output location fails with exit code 1.
#[test]
fn test_build_output_is_a_file() {
    let env = TestEnv::new();
    env.write_file("dist", "not a directory");

    env.command()
        .arg("build")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: I/O error"));
}
