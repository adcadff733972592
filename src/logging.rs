//! Log setup for the terminal binary.
//!
//! The game owns the screen, so logs never go to stdout/stderr. They are
//! written to the file named by `MEMORY_LOG_PATH`; without it nothing is
//! installed and `tracing` calls are no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const ENV_LOG_PATH: &str = "MEMORY_LOG_PATH";

/// Install a file subscriber if `MEMORY_LOG_PATH` is set.
///
/// Returns whether a subscriber was installed. The filter comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init_from_env() -> Result<bool> {
    match std::env::var_os(ENV_LOG_PATH) {
        Some(path) if !path.is_empty() => {
            init_file(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Install a subscriber appending to `path`.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing tracing subscriber")?;

    Ok(())
}
