//! Scribe - process-local file logger with size-based rotation
//!
//! Appends leveled, timestamped lines to a log file, bootstrapping a JSON
//! config file with defaults on first use and rotating the active file to a
//! timestamped backup once it exceeds the configured size. The blocking and
//! suspending entry points share one write algorithm and produce identical
//! output.
//!
//! ```no_run
//! # async fn demo() -> scribe::Result<()> {
//! scribe::log("starting up", "INFO")?;
//! scribe::log_async("finished batch", "DEBUG").await?;
//! # Ok(())
//! # }
//! ```

mod format;
mod io;
mod rotation;
mod writer;

pub use format::{format_timestamp, render_line};
pub use io::{BlockingFs, FileIo, TokioFs};
pub use rotation::{maybe_rotate, RotationOutcome};
pub use writer::Writer;

pub use scribe_core::{Error, LoggerConfig, Result};

/// Write one entry through the blocking writer, bootstrapping the shared
/// config on first use. Runs fully on the calling thread.
pub fn log(message: &str, level: &str) -> Result<()> {
    Writer::new(LoggerConfig::shared()?).write(message, level)
}

/// Write one entry through the suspending writer, bootstrapping the shared
/// config on first use.
pub async fn log_async(message: &str, level: &str) -> Result<()> {
    Writer::new(LoggerConfig::shared()?)
        .write_async(message, level)
        .await
}
