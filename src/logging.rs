//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so events go either to a log file or nowhere.
//! Logging never stops the board from starting: a bad level falls back to the
//! default filter and an unusable log file falls back to the sink.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::{default_log_level, LogConfig};

/// Result of installing the global subscriber
#[derive(Default)]
pub struct Logging {
    /// Keep alive until exit so buffered lines are flushed
    pub guard: Option<WorkerGuard>,
    /// Why parts of the log config were ignored
    pub warnings: Vec<String>,
}

impl Logging {
    /// Whether events are written to a file
    pub fn is_writing(&self) -> bool {
        self.guard.is_some()
    }
}

/// Install the global subscriber, falling back instead of failing.
pub fn init(config: &LogConfig) -> Logging {
    let mut logging = Logging::default();
    if !config.enabled {
        install_sink();
        return logging;
    }

    let filter = match EnvFilter::try_new(&config.level) {
        Ok(filter) => filter,
        Err(err) => {
            logging.warnings.push(format!(
                "invalid log level {:?} ({err}), using {:?}",
                config.level,
                default_log_level()
            ));
            EnvFilter::new(default_log_level())
        }
    };

    let appender = match open_appender(config) {
        Ok(appender) => appender,
        Err(err) => {
            logging.warnings.push(format!("{err:#}, logging disabled"));
            install_sink();
            return logging;
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    logging.guard = Some(guard);
    logging
}

fn install_sink() {
    let _ = tracing_subscriber::fmt().with_writer(io::sink).try_init();
}

fn open_appender(config: &LogConfig) -> Result<RollingFileAppender> {
    let path = config.file_path()?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?
        .to_string_lossy()
        .into_owned();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file {:?}", path))
}
