//! Shared helpers for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every helper

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the mystic-catalog binary
pub fn mystic_bin() -> String {
    std::env::var("CARGO_BIN_EXE_mystic-catalog")
        .unwrap_or_else(|_| env!("CARGO_BIN_EXE_mystic-catalog").to_string())
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(mystic_bin());
    cmd.env("MYSTIC_CATALOG_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Creates an empty temporary config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Runs a command in a fresh config directory.
pub fn run(args: &[&str]) -> Output {
    let dir = temp_config_dir();
    isolated_command(args, dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Runs a command that must succeed and parses its stdout as JSON.
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = run(args);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}
