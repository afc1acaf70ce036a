//! Paginated image galleries of a dataset.

use serde::Serialize;

use super::{DatasetName, FileEntry};
use crate::pagination::{PageWindow, PaginationState};

/// Which asset folder of a dataset a gallery browses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryKind {
    /// Images waiting in the `uploaded/images` staging area.
    Uploaded,
    /// Images already moved into the training split.
    Annotated,
}

impl GalleryKind {
    /// Folder browsed by this gallery, relative to the dataset root.
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Uploaded => crate::paths::UPLOADED_IMAGES,
            Self::Annotated => crate::paths::TRAIN_IMAGES,
        }
    }

    /// Route segment under `/dataset/<name>/`.
    pub const fn route(self) -> &'static str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Annotated => "images/annotated",
        }
    }

    /// Tag the UI uses to pick the active tab.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Annotated => "annotated",
        }
    }
}

/// One page of a gallery, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gallery {
    pub dataset: DatasetName,
    pub kind: GalleryKind,
    pub entries: Vec<FileEntry>,
    pub pagination: PaginationState,
    pub window: PageWindow,
}

/// Result of a browse request.
///
/// Out-of-range and unparsable page numbers are not failures: the caller is
/// sent to the nearest valid page instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    Page(Gallery),
    Redirect { page: u64 },
}
