//! Logger configuration: lazy bootstrap, parsing, and process-wide caching
//!
//! The config file is JSON at a fixed relative path (`scribe.config.json`).
//! On first use a default file is written if none exists; afterwards the
//! parsed result is cached for the remainder of the process.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::*;
use crate::error::{Error, Result};

static SHARED_CONFIG: OnceCell<LoggerConfig> = OnceCell::new();

/// Logger configuration, one instance per process once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Directory for log output (absolute or relative)
    pub log_dir: String,
    /// Base name of the active log file
    pub log_file_name: String,
    /// Byte threshold triggering rotation
    pub max_file_size: u64,
    /// Pattern controlling timestamp rendering (chrono strftime syntax)
    pub date_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: DEFAULT_LOG_DIR.to_string(),
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Parse config content
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|err| Error::ConfigParseError {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Load config from a file, writing the defaults first if it does not exist.
    ///
    /// An existing file is never rewritten. The freshly written defaults are
    /// read back through the same parse path as any other config file.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let defaults = Self::default();
            fs::write(path, defaults.to_pretty_json()?)?;
            info!("Created config file: {}", path.display());
        }
        Self::load(path)
    }

    /// Get the process-wide config, bootstrapping it on first call.
    ///
    /// Later calls return the cached value without touching the filesystem.
    pub fn shared() -> Result<&'static LoggerConfig> {
        SHARED_CONFIG.get_or_try_init(|| Self::load_or_create(&config_path()))
    }

    /// Resolve the configured log directory to an absolute path
    pub fn log_dir_path(&self) -> Result<PathBuf> {
        let dir = Path::new(&self.log_dir);
        if dir.is_absolute() {
            Ok(dir.to_path_buf())
        } else {
            let cwd = std::env::current_dir()
                .map_err(|err| Error::config(format!("Failed to resolve working directory: {}", err)))?;
            Ok(cwd.join(dir))
        }
    }

    /// Serialize with 4-space indentation, fields in declaration order
    fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.log_dir, "./logs");
        assert_eq!(config.log_file_name, "scribe.log");
        assert_eq!(config.max_file_size, 1024 * 1024);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_parse_valid() {
        let content = r#"
{
    "logDir": "/var/log/scribe",
    "logFileName": "app.log",
    "maxFileSize": 2048,
    "dateFormat": "%Y-%m-%d"
}
"#;
        let config = LoggerConfig::parse(content).unwrap();
        assert_eq!(config.log_dir, "/var/log/scribe");
        assert_eq!(config.log_file_name, "app.log");
        assert_eq!(config.max_file_size, 2048);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let result = LoggerConfig::parse(r#"{"logDir": "./logs"}"#);
        assert!(matches!(result, Err(Error::JsonError(_))));
    }

    #[test]
    fn test_bootstrap_creates_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scribe.config.json");

        let config = LoggerConfig::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, LoggerConfig::default());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n    \"logDir\""));
        assert!(content.contains("\"logFileName\": \"scribe.log\""));
        assert!(content.contains("\"maxFileSize\": 1048576"));
        assert!(content.contains("\"dateFormat\""));
    }

    #[test]
    fn test_bootstrap_does_not_rewrite_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scribe.config.json");
        let custom = r#"
{
    "logDir": "./custom",
    "logFileName": "custom.log",
    "maxFileSize": 10,
    "dateFormat": "%H:%M:%S"
}
"#;
        fs::write(&path, custom).unwrap();

        let config = LoggerConfig::load_or_create(&path).unwrap();
        assert_eq!(config.log_dir, "./custom");
        assert_eq!(config.max_file_size, 10);
        assert_eq!(fs::read_to_string(&path).unwrap(), custom);
    }

    #[test]
    fn test_load_malformed_config_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scribe.config.json");
        fs::write(&path, "not json at all").unwrap();

        let result = LoggerConfig::load(&path);
        assert!(matches!(result, Err(Error::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = LoggerConfig::load(Path::new("/nonexistent/scribe.config.json"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_log_dir_path_absolute() {
        let config = LoggerConfig {
            log_dir: "/var/log/scribe".to_string(),
            ..LoggerConfig::default()
        };
        assert_eq!(config.log_dir_path().unwrap(), PathBuf::from("/var/log/scribe"));
    }

    #[test]
    fn test_log_dir_path_relative() {
        let config = LoggerConfig::default();
        let resolved = config.log_dir_path().unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("logs"));
    }
}
