//! Dataset lifecycle: creation, listing and verification.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::domain::{Dashboard, DatasetName};
use crate::paths::DatasetLayout;
use crate::ports::{CatalogError, CoreError, DatasetCatalog, ScaffoldError, WorkspaceScaffold};
use crate::settings::Settings;

/// Service for dataset level operations.
#[derive(Clone)]
pub struct DatasetService {
    scaffold: Arc<dyn WorkspaceScaffold>,
    catalog: Arc<dyn DatasetCatalog>,
    settings: Arc<Settings>,
}

impl DatasetService {
    pub fn new(
        scaffold: Arc<dyn WorkspaceScaffold>,
        catalog: Arc<dyn DatasetCatalog>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            scaffold,
            catalog,
            settings,
        }
    }

    pub fn datasets_root(&self) -> &Path {
        &self.settings.datasets_root
    }

    /// Folder of a dataset, whether or not it exists.
    pub fn dataset_root(&self, name: &DatasetName) -> PathBuf {
        self.layout(name).root().to_path_buf()
    }

    pub(crate) fn layout(&self, name: &DatasetName) -> DatasetLayout {
        DatasetLayout::new(self.datasets_root(), name)
    }

    /// Create a new dataset with the full layout.
    ///
    /// Fails with `CatalogError::AlreadyExists` when the folder is already
    /// there. Scaffold failures leave whatever was created in place.
    pub async fn create(&self, raw_name: &str) -> Result<DatasetName, CoreError> {
        let name = DatasetName::parse(raw_name)?;
        let root = self.dataset_root(&name);
        let started = Instant::now();
        tracing::info!(target: "yoloset.scaffold", dataset = %name, root = %root.display(), "creating dataset");

        if self.catalog.dataset_exists(&root).await {
            return Err(CatalogError::AlreadyExists(name.to_string()).into());
        }
        self.catalog.create_root(&root).await?;

        let result = self.scaffold.create_dataset(self.datasets_root(), &name).await;
        let elapsed_ms = started.elapsed().as_millis();
        match result {
            Ok(()) => {
                tracing::info!(target: "yoloset.scaffold", dataset = %name, elapsed_ms, "dataset created");
                Ok(name)
            }
            Err(e) => {
                tracing::error!(target: "yoloset.scaffold", dataset = %name, elapsed_ms, error = %e, "dataset creation failed");
                Err(e.into())
            }
        }
    }

    /// Names of all datasets, sorted.
    pub async fn list(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.catalog.list_datasets(self.datasets_root()).await?)
    }

    /// Validate the name and check the dataset layout is complete.
    pub async fn verify(&self, raw_name: &str) -> Result<DatasetName, CoreError> {
        let name = DatasetName::parse(raw_name)?;
        match self.scaffold.verify_dataset(self.datasets_root(), &name).await {
            Ok(()) => Ok(name),
            Err(ScaffoldError::NotFound(_)) => Err(CoreError::DatasetNotFound(name.to_string())),
            Err(e) => {
                tracing::warn!(target: "yoloset.scaffold", dataset = %name, error = %e, "dataset failed verification");
                Err(e.into())
            }
        }
    }

    /// Dashboard model for an existing dataset.
    pub async fn dashboard(&self, raw_name: &str) -> Result<Dashboard, CoreError> {
        let name = self.verify(raw_name).await?;
        Ok(Dashboard::new(name))
    }
}
