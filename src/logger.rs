use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static INSTALLED_LEVEL: OnceCell<LevelFilter> = OnceCell::new();

/// Process-wide logger setup backed by `fern`
pub struct Logger;

impl Logger {
    /// Install the global logger described by `config`
    ///
    /// Messages always go to stderr at the configured level. When logging is
    /// enabled they are also appended to [`Logger::get_log_file_path`].
    /// Installing twice is a no-op; the first level wins.
    pub fn init(config: &LoggingConfig) -> Result<()> {
        let level = Self::parse_level(&config.level)?;
        if INSTALLED_LEVEL.get().is_some() {
            return Ok(());
        }

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stderr());

        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        dispatch.apply().context("A global logger is already installed")?;
        let _ = INSTALLED_LEVEL.set(level);
        Ok(())
    }

    /// The level installed by [`Logger::init`], if any
    pub fn installed_level() -> Option<LevelFilter> {
        INSTALLED_LEVEL.get().copied()
    }

    /// Parse a level name such as `"info"` or `"debug"`
    pub fn parse_level(level: &str) -> Result<LevelFilter> {
        level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", level))
    }

    /// Location of the log file inside the local data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
    }
}
