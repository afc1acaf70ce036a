//! Uploaded file storage inside a dataset folder.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use yoloset_core::{AssetError, AssetStore, StoredAsset};

fn checked_path(folder: &Path, file_name: &str) -> Result<PathBuf, AssetError> {
    let single_component = !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(['/', '\\', '\0']);
    if single_component {
        Ok(folder.join(file_name))
    } else {
        Err(AssetError::InvalidFileName(file_name.to_string()))
    }
}

/// Write `bytes` to `folder/file_name`, replacing an existing file.
pub fn store_file(folder: &Path, file_name: &str, bytes: &[u8]) -> Result<StoredAsset, AssetError> {
    let path = checked_path(folder, file_name)?;
    if !folder.is_dir() {
        return Err(AssetError::NotFound(folder.to_path_buf()));
    }
    fs::write(&path, bytes).map_err(|e| AssetError::Io {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(StoredAsset {
        file_name: file_name.to_string(),
        path,
        size: bytes.len() as u64,
    })
}

/// Path of the regular file `folder/file_name`.
pub fn resolve_file(folder: &Path, file_name: &str) -> Result<PathBuf, AssetError> {
    let path = checked_path(folder, file_name)?;
    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => Ok(path),
        Ok(_) => Err(AssetError::NotFound(path)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AssetError::NotFound(path)),
        Err(e) => Err(AssetError::Io {
            path,
            reason: e.to_string(),
        }),
    }
}

/// [`AssetStore`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetStore;

impl FsAssetStore {
    pub const fn new() -> Self {
        Self
    }
}

fn join_failed(path: PathBuf) -> impl FnOnce(String) -> AssetError {
    move |reason| AssetError::Io { path, reason }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn store(
        &self,
        folder: &Path,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredAsset, AssetError> {
        let folder = folder.to_path_buf();
        let file_name = file_name.to_string();
        let on_join = join_failed(folder.join(&file_name));
        crate::blocking::run_blocking(move || store_file(&folder, &file_name, &bytes), on_join).await
    }

    async fn resolve(&self, folder: &Path, file_name: &str) -> Result<PathBuf, AssetError> {
        let folder = folder.to_path_buf();
        let file_name = file_name.to_string();
        let on_join = join_failed(folder.join(&file_name));
        crate::blocking::run_blocking(move || resolve_file(&folder, &file_name), on_join).await
    }
}
