//! Port implementations backed by `std::fs`.
//!
//! `std::io::Error` never crosses a port boundary: each adapter converts it
//! into the port's error enum together with the offending path.

mod assets;
mod catalog;
mod pager;
mod scaffold;

pub use assets::{FsAssetStore, resolve_file, store_file};
pub use catalog::{FsDatasetCatalog, create_dataset_root, list_datasets};
pub use pager::{FsDirectoryPager, list_page};
pub use scaffold::{FsWorkspaceScaffold, create_dataset, verify_dataset};
