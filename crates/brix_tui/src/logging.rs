//! Log setup.
//!
//! The terminal belongs to the UI, so logs go to a file.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs a file-backed tracing subscriber.
///
/// `RUST_LOG` controls the filter and defaults to `info`. Calling this twice
/// keeps the first subscriber.
pub fn init(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
