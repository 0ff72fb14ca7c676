//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The terminal screen owns stdout and the
//! alternate screen, so it logs to a file under the config directory instead.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to a file
    File(PathBuf),
}

impl LogTarget {
    /// Default log file for the terminal screen.
    pub fn default_file() -> Result<Self> {
        Ok(Self::File(
            Config::logs_dir()?.join(format!("{APP_BINARY_NAME}.log")),
        ))
    }
}

/// Builds the level filter. `RUST_LOG` wins over the verbosity flag.
fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into())
}

/// Installs the global subscriber.
pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .context("Failed to install log subscriber")?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create log directory: {}",
                    parent.display()
                ))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .context(format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(env_filter(verbose))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_DIR_ENV;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_lives_in_logs_dir() {
        let dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());

        let target = LogTarget::default_file().unwrap();
        assert_eq!(
            target,
            LogTarget::File(dir.path().join("logs").join("mystic-catalog.log"))
        );
        assert_eq!(
            target,
            LogTarget::File(Config::logs_dir().unwrap().join(format!("{APP_BINARY_NAME}.log")))
        );
    }

    #[test]
    fn test_file_target_creates_log_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("logs").join("screen.log");

        init(false, LogTarget::File(path.clone())).unwrap();
        tracing::info!("log file opened");

        assert!(path.exists());
    }

    #[test]
    fn test_verbose_defaults_to_debug() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(env_filter(true).to_string(), "debug");
            assert_eq!(env_filter(false).to_string(), "info");
        }
    }
}
