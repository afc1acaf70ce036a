//! Composition utilities for building `AppCore` with filesystem backends.
//!
//! This module is focused purely on construction and contains no domain
//! logic.

use std::sync::Arc;

use yoloset_core::{AppCore, Ports, Settings};

use crate::adapters::{FsAssetStore, FsDatasetCatalog, FsDirectoryPager, FsWorkspaceScaffold};

/// Factory for port instances backed by the local filesystem.
pub struct FsFactory;

impl FsFactory {
    /// Build all filesystem ports.
    ///
    /// The adapters are stateless: every path they touch is passed in by
    /// the core services, which derive it from `Settings::datasets_root`.
    pub fn build_ports() -> Ports {
        Ports::new(
            Arc::new(FsDirectoryPager::new()),
            Arc::new(FsWorkspaceScaffold::new()),
            Arc::new(FsDatasetCatalog::new()),
            Arc::new(FsAssetStore::new()),
        )
    }

    /// Build a complete `AppCore` in one step.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let ports = FsFactory::build_ports();
    /// let core = AppCore::new(ports, settings);
    /// ```
    pub fn build_app_core(settings: Settings) -> AppCore {
        AppCore::new(Self::build_ports(), settings)
    }
}
