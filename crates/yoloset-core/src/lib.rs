//! Core domain for yoloset: dataset layout, pagination math and the ports
//! that filesystem and HTTP adapters plug into.
//!
//! The crate performs no I/O of its own. Everything that touches the disk goes
//! through a port trait defined in [`ports`]; `yoloset-fs` provides the
//! filesystem implementations and adapters (HTTP, CLI) wire them together.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod pagination;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    BrowseOutcome, Dashboard, DatasetName, DatasetNameError, FileEntry, Gallery, GalleryKind,
};
pub use pagination::{
    DEFAULT_ITEMS_PER_PAGE, DEFAULT_WINDOW_SIZE, PageCheck, PageWindow, PaginationError,
    PaginationState, RequestedPage, compute_last_page, parse_requested_page, resolve_redirect,
    window,
};
pub use ports::{
    AssetError, AssetStore, CatalogError, CoreError, DatasetCatalog, DirectoryPager, ListedPage,
    PagerError, Ports, ScaffoldError, StoredAsset, WorkspaceScaffold,
};
pub use services::{AppCore, AssetService, DatasetService, GalleryService};
pub use settings::{Settings, SettingsError, validate_settings};
pub use utils::{format_file_size, sanitize_file_name};

// Re-export path utilities
pub use paths::{
    DATA_YAML_CONTENT, DEFAULT_DATASETS_ROOT, DatasetLayout, DatasetsRootResolution,
    DatasetsRootSource, PathError, REQUIRED_PATHS, RequiredPath, ResolvedPaths, SCAFFOLD_PLAN,
    ScaffoldStep, ensure_datasets_root, resolve_datasets_root,
};
