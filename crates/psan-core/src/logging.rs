//! Log setup for the `psan` binary.
//!
//! Stdout carries sanitized HTML, so logs never go there. They go to
//! `~/.local/state/psan/psan.log` when that file can be opened, and to
//! stderr otherwise. Stderr output is kept to warnings by default so that
//! `psan sanitize < in.html > out.html` stays quiet in a terminal.
//! `RUST_LOG` overrides either default.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log records end up after [`init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

impl LogDestination {
    /// Filter directives used when `RUST_LOG` is unset.
    pub fn default_directives(&self) -> &'static str {
        match self {
            LogDestination::File(_) => "info,psan_core=debug,psan_cli=debug",
            LogDestination::Stderr => "warn",
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()))
    }
}

/// Log file location below an XDG state home.
pub fn log_file_path(state_home: &Path) -> PathBuf {
    state_home.join("psan").join("psan.log")
}

fn open_log_file() -> Result<(File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("psan")?;
    let path = log_file_path(&xdg_dirs.get_state_home());
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((file, path))
}

/// Install the global subscriber. Falls back to stderr when the log file
/// cannot be opened; never fails.
pub fn init_logging() -> LogDestination {
    match open_log_file() {
        Ok((file, path)) => {
            let destination = LogDestination::File(path);
            tracing_subscriber::fmt()
                .with_env_filter(destination.env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
            destination
        }
        Err(err) => {
            let destination = LogDestination::Stderr;
            tracing_subscriber::fmt()
                .with_env_filter(destination.env_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::debug!("log file unavailable, using stderr: {err:#}");
            destination
        }
    }
}
