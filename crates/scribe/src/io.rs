//! Filesystem capability behind the blocking and suspending write paths

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Filesystem operations the write pipeline needs.
///
/// The directory-bootstrap/rotate/append sequence is written once against
/// this trait; [`BlockingFs`] and [`TokioFs`] instantiate it for the two
/// execution modes.
#[async_trait]
pub trait FileIo: Send + Sync {
    /// Whether the path exists
    async fn exists(&self, path: &Path) -> bool;

    /// File size in bytes, or `None` if the file does not exist
    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>>;

    /// Create a directory and all missing parents
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Rename (move) a file
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Append bytes to a file, creating it if absent
    async fn append(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// `std::fs` instantiation. None of its methods await, so driving the
/// pipeline with a trivial executor runs it fully on the calling thread.
pub struct BlockingFs;

#[async_trait]
impl FileIo for BlockingFs {
    async fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(Some(meta.len())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    async fn append(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        use std::io::Write;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        file.write_all(bytes)
    }
}

/// `tokio::fs` instantiation; suspends at every operation
pub struct TokioFs;

#[async_trait]
impl FileIo for TokioFs {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        match tokio::fs::metadata(path).await {
            Ok(meta) => Ok(Some(meta.len())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        tokio::fs::rename(from, to).await
    }

    async fn append(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await
    }
}
