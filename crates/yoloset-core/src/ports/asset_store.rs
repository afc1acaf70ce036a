//! Uploaded file storage port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// A file written by [`AssetStore::store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub file_name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Errors raised while storing or locating uploaded files.
#[derive(Debug, Error)]
pub enum AssetError {
    /// File name is empty or not a single path component.
    #[error("Invalid file name: '{0}'")]
    InvalidFileName(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to access {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

/// Reads and writes files inside a dataset asset folder.
///
/// `file_name` is always a single, already sanitized path component.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Write `bytes` to `folder/file_name`, replacing any existing file.
    async fn store(
        &self,
        folder: &Path,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredAsset, AssetError>;

    /// Path of an existing regular file `folder/file_name`.
    async fn resolve(&self, folder: &Path, file_name: &str) -> Result<PathBuf, AssetError>;
}
