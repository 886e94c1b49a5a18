//! The write pipeline shared by the blocking and suspending paths

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use scribe_core::{Error, LoggerConfig, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::error;

use crate::format;
use crate::io::{BlockingFs, FileIo, TokioFs};
use crate::rotation;

/// Per-log-file locks. Rotation and append run as one unit under the file's
/// lock, serializing all writers in the process that target the same file.
static FILE_LOCKS: Lazy<Mutex<HashMap<PathBuf, Arc<tokio::sync::Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn file_lock(path: &Path) -> Arc<tokio::sync::Mutex<()>> {
    FILE_LOCKS
        .lock()
        .entry(path.to_path_buf())
        .or_default()
        .clone()
}

/// How a writer reacts when the rotation step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RotationFailure {
    /// Surface the error to the caller
    Propagate,
    /// Report the error and append anyway
    Report,
}

/// Appends formatted entries to the configured log file, rotating it to a
/// timestamped backup first when it has outgrown the configured threshold.
pub struct Writer<'a> {
    config: &'a LoggerConfig,
}

impl<'a> Writer<'a> {
    pub fn new(config: &'a LoggerConfig) -> Self {
        Self { config }
    }

    /// Write one entry, blocking the calling thread for every filesystem step.
    ///
    /// A rotation failure is fatal on this path.
    pub fn write(&self, message: &str, level: &str) -> Result<()> {
        futures::executor::block_on(write_entry(
            &BlockingFs,
            self.config,
            message,
            level,
            RotationFailure::Propagate,
        ))
    }

    /// Write one entry, suspending at every filesystem step.
    ///
    /// A rotation failure is reported and the append still happens, so the
    /// active file keeps growing until a later rotation succeeds.
    pub async fn write_async(&self, message: &str, level: &str) -> Result<()> {
        write_entry(
            &TokioFs,
            self.config,
            message,
            level,
            RotationFailure::Report,
        )
        .await
    }
}

/// The write algorithm both variants instantiate: resolve and bootstrap the
/// log directory, render the line, then rotate-and-append under the file lock.
async fn write_entry<IO: FileIo>(
    io: &IO,
    config: &LoggerConfig,
    message: &str,
    level: &str,
    on_rotation_failure: RotationFailure,
) -> Result<()> {
    let log_dir = config.log_dir_path()?;
    if !io.exists(&log_dir).await {
        io.create_dir_all(&log_dir)
            .await
            .map_err(|err| Error::DirectoryError {
                path: log_dir.clone(),
                source: err,
            })?;
    }

    let timestamp = format::format_timestamp(&config.date_format)?;
    let line = format::render_line(&timestamp, level, message);
    let log_file = log_dir.join(&config.log_file_name);

    let lock = file_lock(&log_file);
    let _guard = lock.lock().await;

    if let Err(err) = rotation::maybe_rotate(io, &log_file, config.max_file_size).await {
        match on_rotation_failure {
            RotationFailure::Propagate => return Err(err),
            RotationFailure::Report => error!("Log rotation failed: {}", err),
        }
    }

    io.append(&log_file, line.as_bytes())
        .await
        .map_err(|err| Error::AppendError {
            path: log_file.clone(),
            source: err,
        })
}
