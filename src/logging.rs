// File: src/logging.rs
// File logger setup. The terminal belongs to the TUI, so logs go to disk.
use crate::context::AppContext;
use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Installs a `WriteLogger` appending to the context's log file and returns
/// its path. Fails if a logger is already installed.
pub fn init(ctx: &dyn AppContext, level: log::LevelFilter) -> Result<PathBuf> {
    let path = ctx
        .get_log_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine log file path"))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Error)
        .build();
    WriteLogger::init(level, config, file).context("Logger already initialised")?;
    Ok(path)
}
