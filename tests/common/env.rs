//! Test environment builder for isolated Boxpick testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a Boxpick CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment: a temp project directory plus helpers to
/// write data feeds and run the boxpick binary inside it.
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("failed to create temp project dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_boxpick")),
        }
    }

    /// Path relative to the project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write orders.json and catalog.json into a data directory
    pub fn write_feed_in(&self, dir: &str, orders: &str, catalog: &str) {
        let data_dir = self.path(dir);
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join("orders.json"), orders).unwrap();
        fs::write(data_dir.join("catalog.json"), catalog).unwrap();
    }

    /// Write the feed into the default `data/` directory
    pub fn write_feed(&self, orders: &str, catalog: &str) {
        self.write_feed_in("data", orders, catalog);
    }

    /// Write a boxpick.toml into the project root
    pub fn write_config(&self, content: &str) {
        fs::write(self.path("boxpick.toml"), content).unwrap();
    }

    /// Run boxpick from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run boxpick with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .current_dir(self.project_root.path())
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8")
            .env("NO_COLOR", "1")
            .env_remove("BOXPICK_DATA_DIR")
            .env_remove("BOXPICK_DEFAULT_DATE")
            .env_remove("BOXPICK_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run boxpick binary");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: path helper for assertions on temp paths
pub fn file_exists(path: &Path) -> bool {
    path.exists()
}
