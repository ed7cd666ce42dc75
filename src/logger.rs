//! Log plumbing: the in-memory buffer shown by the log viewer and the fern
//! dispatch that feeds it.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Oldest entries are dropped beyond this many
const MAX_ENTRIES: usize = 1000;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_ENTRIES))),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_ENTRIES {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        self.logs
            .lock()
            .map(|logs| logs.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the fern dispatch: records always reach `logger`, and also a log
/// file when logging is enabled in the configuration.
pub fn build_dispatch(config: &LoggingConfig, logger: Logger) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    let memory = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
        .chain(fern::Output::call(move |record| logger.log(record.args().to_string())));

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("rustls", log::LevelFilter::Warn)
        .chain(memory);

    if config.enabled {
        let path = config.file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} [{}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    Ok(dispatch)
}

/// Install the global logger
pub fn init(config: &LoggingConfig, logger: Logger) -> Result<()> {
    build_dispatch(config, logger)?
        .apply()
        .context("Failed to install logger")?;
    Ok(())
}
