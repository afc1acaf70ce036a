//! Paged directory listing port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::FileEntry;
use crate::pagination::PaginationError;

/// One slice of a directory listing plus the size of the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListedPage {
    pub entries: Vec<FileEntry>,
    pub total_items: u64,
}

/// Errors raised while listing a folder.
#[derive(Debug, Error)]
pub enum PagerError {
    /// Folder is missing or is not a directory.
    #[error("Folder not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: items per page must be at least 1")]
    InvalidConfiguration,

    #[error("Invalid page: {0}")]
    InvalidPage(u64),

    #[error("Failed to read {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

impl From<PaginationError> for PagerError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::InvalidConfiguration => Self::InvalidConfiguration,
            PaginationError::InvalidPage(page) => Self::InvalidPage(page),
        }
    }
}

/// Lists one page of a folder's entries.
///
/// # Contract
///
/// - Every call re-enumerates the folder; the total is always exact for the
///   enumeration that produced the slice.
/// - Entries are returned in enumeration order, which is only stable while
///   the folder is not being modified.
/// - A page past the end yields no entries and the true total, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryPager: Send + Sync {
    /// List entries `[(page-1)*items_per_page, page*items_per_page)` of `folder`.
    ///
    /// Returns `Err(PagerError::InvalidConfiguration)` for a page size of zero
    /// and `Err(PagerError::InvalidPage)` for page zero.
    async fn list_page(
        &self,
        folder: &Path,
        page: u64,
        items_per_page: u64,
    ) -> Result<ListedPage, PagerError>;
}
