//! Dataset layout creation and verification port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::DatasetName;

/// Errors raised while creating or checking a dataset layout.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Dataset root folder does not exist.
    #[error("Dataset folder not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Root exists but some layout members are missing or of the wrong kind.
    #[error("Dataset at {} is incomplete, missing: {}", root.display(), missing.join(", "))]
    Incomplete { root: PathBuf, missing: Vec<String> },

    /// A create or write step failed. Earlier steps are not rolled back.
    #[error("Failed to create {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

/// Creates and validates the fixed on-disk layout of a dataset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceScaffold: Send + Sync {
    /// Create every folder of the layout and write `dataset/data.yaml`
    /// under `datasets_root/name`.
    ///
    /// Steps run in a fixed order and the first failure aborts the rest.
    async fn create_dataset(
        &self,
        datasets_root: &Path,
        name: &DatasetName,
    ) -> Result<(), ScaffoldError>;

    /// Check that every required path exists with the right kind.
    async fn verify_dataset(
        &self,
        datasets_root: &Path,
        name: &DatasetName,
    ) -> Result<(), ScaffoldError>;
}
