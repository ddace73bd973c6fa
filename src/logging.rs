use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Path of the log file; logging stays off when unset.
pub const LOG_ENV: &str = "RESULTPANE_LOG";
/// Filter directives, e.g. `resultpane=trace`.
pub const LEVEL_ENV: &str = "RESULTPANE_LOG_LEVEL";

/// Install a file-backed tracing subscriber if `RESULTPANE_LOG` is set.
///
/// The terminal belongs to the UI, so nothing is ever written to stdout/stderr.
/// Returns whether a subscriber was installed.
pub fn init() -> Result<bool> {
    let Ok(path) = std::env::var(LOG_ENV) else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path))?;

    let filter = EnvFilter::try_from_env(LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(true)
}
