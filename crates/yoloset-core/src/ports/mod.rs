//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from storage.
//! They take fully resolved paths: all layout math (where a dataset lives,
//! which folder a gallery browses) stays in core, so an adapter only has to
//! answer questions about the paths it is handed.
//!
//! # Design Rules
//!
//! - No adapter types (`std::fs::DirEntry`, `io::Error`) in any signature
//! - One trait per concern, each with its own error enum
//! - Traits are `Send + Sync` so they can live behind `Arc<dyn ...>`

pub mod asset_store;
pub mod dataset_catalog;
pub mod directory_pager;
pub mod workspace_scaffold;

use std::sync::Arc;
use thiserror::Error;

pub use asset_store::{AssetError, AssetStore, StoredAsset};
pub use dataset_catalog::{CatalogError, DatasetCatalog};
pub use directory_pager::{DirectoryPager, ListedPage, PagerError};
pub use workspace_scaffold::{ScaffoldError, WorkspaceScaffold};

/// Container for all port trait objects.
///
/// Lives in `yoloset-core` so that `AppCore` can accept it without depending
/// on `yoloset-fs`.
///
/// # Example
///
/// ```ignore
/// // In yoloset-fs factory:
/// pub fn build_ports() -> Ports { ... }
///
/// // In adapter bootstrap:
/// let ports = yoloset_fs::FsFactory::build_ports();
/// let core = AppCore::new(ports, settings);
/// ```
#[derive(Clone)]
pub struct Ports {
    /// Paged directory listings for galleries.
    pub pager: Arc<dyn DirectoryPager>,
    /// Dataset layout creation and verification.
    pub scaffold: Arc<dyn WorkspaceScaffold>,
    /// Dataset enumeration under the datasets root.
    pub catalog: Arc<dyn DatasetCatalog>,
    /// Uploaded file storage.
    pub assets: Arc<dyn AssetStore>,
}

impl Ports {
    /// Create a new Ports container.
    pub fn new(
        pager: Arc<dyn DirectoryPager>,
        scaffold: Arc<dyn WorkspaceScaffold>,
        catalog: Arc<dyn DatasetCatalog>,
        assets: Arc<dyn AssetStore>,
    ) -> Self {
        Self {
            pager,
            scaffold,
            catalog,
            assets,
        }
    }
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type returned by services. Adapters map it to
/// their own error types (HTTP status codes, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Dataset name failed validation.
    #[error(transparent)]
    InvalidName(#[from] crate::domain::DatasetNameError),

    /// No dataset folder with that name.
    #[error("Dataset '{0}' not found")]
    DatasetNotFound(String),

    #[error(transparent)]
    Pager(#[from] PagerError),

    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Pagination(#[from] crate::pagination::PaginationError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
