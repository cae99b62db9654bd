use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{Error, Result};

/// Overrides the configured filter when set.
pub const LOG_ENV: &str = "NOTES_TASKS_LOG";

/// Routes `tracing` output to a file; the terminal belongs to the UI.
///
/// Returns the log file in use, or `None` when no location could be determined.
pub fn init(config: &LogConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.file_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(&config.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        "logging started"
    );
    Ok(Some(path))
}

fn filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|err| Error::Logging(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive_is_reported() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        assert!(matches!(filter("notes_tasks=loudest"), Err(Error::Logging(_))));
        assert!(filter("notes_tasks=debug").is_ok());
    }
}
