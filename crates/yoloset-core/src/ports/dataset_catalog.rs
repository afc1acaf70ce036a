//! Dataset enumeration port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while enumerating or creating dataset roots.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Datasets folder not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Dataset '{0}' already exists")]
    AlreadyExists(String),

    #[error("Failed to access {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

/// Enumerates datasets living under the datasets root.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetCatalog: Send + Sync {
    /// Names of every directory directly under `datasets_root`, sorted.
    async fn list_datasets(&self, datasets_root: &Path) -> Result<Vec<String>, CatalogError>;

    /// Whether `dataset_root` exists.
    async fn dataset_exists(&self, dataset_root: &Path) -> bool;

    /// Create the dataset root folder itself.
    ///
    /// Parent folders are created as needed, the root must not exist yet:
    /// returns `Err(CatalogError::AlreadyExists)` otherwise.
    async fn create_root(&self, dataset_root: &Path) -> Result<(), CatalogError>;
}
