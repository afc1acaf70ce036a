//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use super::{AssetService, DatasetService, GalleryService};
use crate::ports::Ports;
use crate::settings::Settings;

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let ports = yoloset_fs::FsFactory::build_ports();
/// let core = AppCore::new(ports, Settings::default());
///
/// let names = core.datasets().list().await?;
/// ```
pub struct AppCore {
    settings: Arc<Settings>,
    datasets: DatasetService,
    galleries: GalleryService,
    assets: AssetService,
}

impl AppCore {
    /// Create a new `AppCore` from the port container and resolved settings.
    pub fn new(ports: Ports, settings: Settings) -> Self {
        let settings = Arc::new(settings);
        let datasets = DatasetService::new(ports.scaffold, ports.catalog, Arc::clone(&settings));
        let galleries = GalleryService::new(ports.pager, datasets.clone(), Arc::clone(&settings));
        let assets = AssetService::new(ports.assets, datasets.clone());
        Self {
            settings,
            datasets,
            galleries,
            assets,
        }
    }

    /// Settings the services were built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Access the dataset service.
    pub const fn datasets(&self) -> &DatasetService {
        &self.datasets
    }

    /// Access the gallery service.
    pub const fn galleries(&self) -> &GalleryService {
        &self.galleries
    }

    /// Access the asset service.
    pub const fn assets(&self) -> &AssetService {
        &self.assets
    }
}
