use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

/// Dispatcher with the crate's record format and level, without any output
///
/// Records look like `[14:03:07.512 DEBUG dateutils::diff] message`.
pub fn formatter(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level))
}

/// Dispatcher writing to the log file or stderr, depending on the config
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let base = formatter(config)?;

    if config.file {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        Ok(base.chain(file))
    } else {
        Ok(base.chain(std::io::stderr()))
    }
}

/// Install the configured logger as the global `log` backend
///
/// Fails if a logger has already been installed in this process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    dispatch(config)?.apply().context("Failed to install logger")
}

/// Path of the log file: `<data dir>/dateutils/dateutils.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
