use std::fs::OpenOptions;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("logger already initialised: {0}")]
    Init(String),
}

/// Install the global subscriber.
///
/// With a log file configured everything goes there. Otherwise logs reach
/// stderr only when `to_stderr` is set, since the TUI owns the terminal.
pub fn init(config: &LogConfig, to_stderr: bool) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|e| LoggingError::Filter(e.to_string()))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = &config.file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| LoggingError::Init(e.to_string()))
    } else if to_stderr {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| LoggingError::Init(e.to_string()))
    } else {
        Ok(())
    }
}
