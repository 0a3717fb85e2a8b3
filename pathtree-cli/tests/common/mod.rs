//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would otherwise leak into test runs.
const PATHTREE_ENV_VARS: [&str; 7] = [
    "PATHTREE_SEPARATOR",
    "PATHTREE_MAX_DEPTH",
    "PATHTREE_INCLUDE_TERMINAL",
    "PATHTREE_OUTPUT_FORMAT",
    "PATHTREE_CONFIG_DIR",
    "PATHTREE_LIST_FORMAT",
    "PATHTREE_LOG_MODE",
];

/// Paths of a small documentation site.
#[allow(dead_code)]
pub const SITE_PATHS: &str = "\
# documentation site
home
home/module1
home/module1/component1
home/module2/component1/service1

root2
";

/// Test environment with isolated working and configuration directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The configuration directory path is not created; commands then run
    /// with built-in defaults unless a test writes a config file.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("pathtree-config");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a command builder running in the temp directory without
    /// pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathtree").expect("Failed to find pathtree binary");
        for var in PATHTREE_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the configuration directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file below the temp directory, creating parent directories.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the site fixture as a path list and return its location.
    pub fn site_file(&self) -> PathBuf {
        self.write_file("paths.txt", SITE_PATHS)
    }

    /// Write the user `config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        std::fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathtree");

        assert!(
            output.status.success(),
            "pathtree {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
