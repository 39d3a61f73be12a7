//! Build command implementation.
//!
//! The build command writes the application's output files into the output
//! directory, creating it if needed.

use crate::error::CliError;
use crate::utils::{resolve_path, GlobalOptions};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tool::Logger;

/// Files produced by every build.
pub const BUILD_FILES: [&str; 3] = ["index.html", "app.js", "styles.css"];

/// Build the application.
#[derive(Args)]
pub struct BuildCommand {
    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "dist")]
    pub output: PathBuf,

    /// Minify output
    #[arg(long)]
    pub minify: bool,
}

impl BuildCommand {
    /// Execute the build command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let logger = Logger::new("commands:build");
        logger.debug(&format!(
            "Build options: output={}, minify={}",
            self.output.display(),
            self.minify
        ));

        let output_dir = resolve_path(&self.output)?;
        if let Err(e) = write_build_files(&output_dir, self.minify) {
            logger.error(&format!("Build error: {e}"));
            return Err(e);
        }

        println!("Build completed successfully!");
        println!();
        println!("Build output: {}", output_dir.display());
        println!("Files created: {}", BUILD_FILES.len());
        if self.minify {
            println!("Minification enabled");
        }

        Ok(())
    }
}

/// Contents written for `name`.
pub fn build_file_contents(name: &str, minify: bool) -> String {
    let minified = if minify { "Yes" } else { "No" };
    format!("// Built file: {name}\n// Minified: {minified}\n")
}

/// Create `output_dir` and write every build file into it.
pub fn write_build_files(output_dir: &Path, minify: bool) -> Result<Vec<PathBuf>, CliError> {
    fs::create_dir_all(output_dir).map_err(|source| CliError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    BUILD_FILES
        .iter()
        .map(|name| {
            let path = output_dir.join(name);
            fs::write(&path, build_file_contents(name, minify)).map_err(|source| {
                CliError::Io {
                    path: path.clone(),
                    source,
                }
            })?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_file_contents() {
        assert_eq!(
            build_file_contents("app.js", true),
            "// Built file: app.js\n// Minified: Yes\n"
        );
        assert_eq!(
            build_file_contents("index.html", false),
            "// Built file: index.html\n// Minified: No\n"
        );
    }

    #[test]
    fn test_write_build_files_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out").join("web");

        let written = write_build_files(&output, false).unwrap();
        assert_eq!(written.len(), 3);
        for name in BUILD_FILES {
            let contents = fs::read_to_string(output.join(name)).unwrap();
            assert_eq!(contents, build_file_contents(name, false));
        }
    }

    #[test]
    fn test_write_build_files_output_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("dist");
        fs::write(&output, "not a directory").unwrap();

        let err = write_build_files(&output, true).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
