//! Integration Log Sink
//!
//! Append-only text log for one integration run. The subscriber is installed
//! as the thread default for the lifetime of the returned [`LogSession`]
//! instead of process-wide, so tests can each open their own sink.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::constants::DEFAULT_LOG_LEVEL;

/// Active log sink. Dropping it uninstalls the subscriber.
pub struct LogSession {
    path: PathBuf,
    _guard: DefaultGuard,
}

impl LogSession {
    /// Get the log file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open the log file (append, never truncate) and install the subscriber
pub fn init(config: &Config) -> io::Result<LogSession> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    let (filter, rejected) = match EnvFilter::try_new(&config.log_level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(e)),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .finish();

    let guard = tracing::subscriber::set_default(subscriber);

    if let Some(e) = rejected {
        tracing::warn!(
            "Invalid log level '{}' ({}), using '{}'",
            config.log_level,
            e,
            DEFAULT_LOG_LEVEL
        );
    }

    Ok(LogSession {
        path: config.log_path.clone(),
        _guard: guard,
    })
}
