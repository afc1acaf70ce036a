//! Startup preparation of the datasets root.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::PathError;

/// Scratch file written once to prove the root accepts new files.
///
/// Its leading dot keeps it out of dataset names and listings.
const WRITE_CHECK_FILE: &str = ".yoloset_write_check";

/// Make sure `root` is a writable folder, creating it and its parents when
/// missing.
///
/// Datasets are created lazily under the root, so a read-only root would
/// otherwise only surface on the first `create`.
pub fn ensure_datasets_root(root: &Path) -> Result<(), PathError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(PathError::NotAFolder(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(root).map_err(|e| PathError::Create {
                path: root.to_path_buf(),
                reason: e.to_string(),
            })?;
            tracing::info!(target: "yoloset.paths", root = %root.display(), "created datasets root");
        }
        Err(e) => {
            return Err(PathError::Create {
                path: root.to_path_buf(),
                reason: e.to_string(),
            });
        }
    }

    let check = root.join(WRITE_CHECK_FILE);
    fs::write(&check, b"")
        .and_then(|()| fs::remove_file(&check))
        .map_err(|e| PathError::ReadOnly {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })
}
