//! Domain types shared by every adapter.
//!
//! These are plain data types with no I/O. Anything that needs to read or
//! write the disk lives behind a port in [`crate::ports`].

mod dataset;
mod entry;
mod gallery;

pub use dataset::{Dashboard, DatasetName, DatasetNameError, MAX_DATASET_NAME_LEN};
pub use entry::FileEntry;
pub use gallery::{BrowseOutcome, Gallery, GalleryKind};
