//! Constants and default values for Scribe

use std::path::PathBuf;

/// Config file name, resolved relative to the working directory
pub const CONFIG_FILE: &str = "scribe.config.json";

/// Default log output directory
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Default active log file name
pub const DEFAULT_LOG_FILE_NAME: &str = "scribe.log";

/// Default rotation threshold in bytes (1MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Default timestamp pattern (chrono strftime syntax)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the separator line written after every entry
pub const SEPARATOR_WIDTH: usize = 80;

/// Get the config file path
pub fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}
