//! Paged directory listing over `std::fs::read_dir`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use yoloset_core::{DirectoryPager, FileEntry, ListedPage, PagerError};

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PagerError + '_ {
    move |e| PagerError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// List one page of `folder`, entries sorted by name.
///
/// The whole folder is read on every call: the total has to be exact and
/// the slice has to come from the same enumeration.
pub fn list_page(folder: &Path, page: u64, items_per_page: u64) -> Result<ListedPage, PagerError> {
    if items_per_page == 0 {
        return Err(PagerError::InvalidConfiguration);
    }
    if page == 0 {
        return Err(PagerError::InvalidPage(page));
    }

    match fs::metadata(folder) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(PagerError::NotFound(folder.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PagerError::NotFound(folder.to_path_buf()));
        }
        Err(e) => return Err(io_error(folder)(e)),
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(folder).map_err(io_error(folder))? {
        let entry = entry.map_err(io_error(folder))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort_unstable();

    let total_items = names.len() as u64;
    let start = (page - 1).saturating_mul(items_per_page);
    let end = start.saturating_add(items_per_page).min(total_items);
    let entries = if start >= total_items {
        Vec::new()
    } else {
        // Both bounds are <= names.len(), so they fit in usize.
        names
            .drain(start as usize..end as usize)
            .map(FileEntry::new)
            .collect()
    };

    tracing::debug!(
        target: "yoloset.pager",
        folder = %folder.display(),
        page,
        returned = entries.len(),
        total_items,
        "listed folder"
    );
    Ok(ListedPage {
        entries,
        total_items,
    })
}

/// [`DirectoryPager`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryPager;

impl FsDirectoryPager {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DirectoryPager for FsDirectoryPager {
    async fn list_page(
        &self,
        folder: &Path,
        page: u64,
        items_per_page: u64,
    ) -> Result<ListedPage, PagerError> {
        let folder_buf: PathBuf = folder.to_path_buf();
        let join_path = folder_buf.clone();
        crate::blocking::run_blocking(
            move || list_page(&folder_buf, page, items_per_page),
            move |reason| PagerError::Io {
                path: join_path,
                reason,
            },
        )
        .await
    }
}
