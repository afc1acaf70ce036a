//! Dataset enumeration under the datasets root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use yoloset_core::{CatalogError, DatasetCatalog};

fn io_error(path: &Path, e: &std::io::Error) -> CatalogError {
    CatalogError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// Names of the folders directly under `datasets_root`, sorted.
///
/// Plain files and hidden entries (leading `.`) are skipped.
pub fn list_datasets(datasets_root: &Path) -> Result<Vec<String>, CatalogError> {
    let entries = match fs::read_dir(datasets_root) {
        Ok(entries) => entries,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Err(CatalogError::NotFound(datasets_root.to_path_buf()));
        }
        Err(e) => return Err(io_error(datasets_root, &e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_error(datasets_root, &e))?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();

    tracing::debug!(target: "yoloset.catalog", root = %datasets_root.display(), count = names.len(), "listed datasets");
    Ok(names)
}

/// Create `dataset_root` and any missing parents.
///
/// The last component must not exist yet; of two concurrent creations of
/// the same dataset exactly one succeeds.
pub fn create_dataset_root(dataset_root: &Path) -> Result<(), CatalogError> {
    if let Some(parent) = dataset_root.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, &e))?;
    }
    match fs::create_dir(dataset_root) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(CatalogError::AlreadyExists(
            dataset_root
                .file_name()
                .map_or_else(String::new, |n| n.to_string_lossy().into_owned()),
        )),
        Err(e) => Err(io_error(dataset_root, &e)),
    }
}

/// [`DatasetCatalog`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDatasetCatalog;

impl FsDatasetCatalog {
    pub const fn new() -> Self {
        Self
    }
}

fn join_failed(path: PathBuf) -> impl FnOnce(String) -> CatalogError {
    move |reason| CatalogError::Io { path, reason }
}

#[async_trait]
impl DatasetCatalog for FsDatasetCatalog {
    async fn list_datasets(&self, datasets_root: &Path) -> Result<Vec<String>, CatalogError> {
        let root = datasets_root.to_path_buf();
        let on_join = join_failed(root.clone());
        crate::blocking::run_blocking(move || list_datasets(&root), on_join).await
    }

    async fn dataset_exists(&self, dataset_root: &Path) -> bool {
        tokio::fs::try_exists(dataset_root).await.unwrap_or(false)
    }

    async fn create_root(&self, dataset_root: &Path) -> Result<(), CatalogError> {
        let root = dataset_root.to_path_buf();
        let on_join = join_failed(root.clone());
        crate::blocking::run_blocking(move || create_dataset_root(&root), on_join).await
    }
}
