//! Size-based rotation: move an oversized log file to a timestamped backup

use chrono::{DateTime, SecondsFormat, Utc};
use scribe_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::io::FileIo;

/// What a rotation check did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationOutcome {
    /// Whether the active file was moved aside
    pub rotated: bool,
    /// Backup destination when a rotation happened
    pub backup_path: Option<PathBuf>,
}

impl RotationOutcome {
    fn untouched() -> Self {
        Self {
            rotated: false,
            backup_path: None,
        }
    }
}

/// Rotate `path` to a timestamped backup if its size exceeds `threshold` bytes.
///
/// A missing file never rotates. Stat and rename failures both classify as
/// [`Error::RotationError`]; whether that is fatal is the caller's policy.
pub async fn maybe_rotate<IO: FileIo>(
    io: &IO,
    path: &Path,
    threshold: u64,
) -> Result<RotationOutcome> {
    let size = match io
        .file_size(path)
        .await
        .map_err(|err| Error::RotationError {
            path: path.to_path_buf(),
            source: err,
        })? {
        Some(size) => size,
        None => return Ok(RotationOutcome::untouched()),
    };

    if size <= threshold {
        return Ok(RotationOutcome::untouched());
    }

    let backup = backup_path(path, Utc::now());
    io.rename(path, &backup)
        .await
        .map_err(|err| Error::RotationError {
            path: path.to_path_buf(),
            source: err,
        })?;
    debug!("Rotated {} -> {}", path.display(), backup.display());

    Ok(RotationOutcome {
        rotated: true,
        backup_path: Some(backup),
    })
}

/// Backup name for a log file: the stem, an underscore, the instant as UTC
/// RFC 3339 with colons replaced by hyphens, and the original extension.
fn backup_path(path: &Path, instant: DateTime<Utc>) -> PathBuf {
    let stamp = instant
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-");
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    };
    path.with_file_name(name)
}
