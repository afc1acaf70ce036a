//! Uploads into, and downloads from, a dataset's staging folder.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use super::DatasetService;
use crate::paths::UPLOADED_IMAGES;
use crate::ports::{AssetError, AssetStore, CoreError, StoredAsset};
use crate::utils::sanitize_file_name;

/// Service for uploaded images.
#[derive(Clone)]
pub struct AssetService {
    store: Arc<dyn AssetStore>,
    datasets: DatasetService,
}

impl AssetService {
    pub fn new(store: Arc<dyn AssetStore>, datasets: DatasetService) -> Self {
        Self { store, datasets }
    }

    /// Store an uploaded image in `uploaded/images`.
    ///
    /// The client's file name is cut down to its last path component. An
    /// existing file with the same name is replaced.
    pub async fn upload(
        &self,
        raw_name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredAsset, CoreError> {
        let name = self.datasets.verify(raw_name).await?;
        let file_name = sanitize_file_name(file_name)
            .ok_or_else(|| AssetError::InvalidFileName(file_name.to_string()))?;
        let folder = self.datasets.layout(&name).join(UPLOADED_IMAGES);

        let started = Instant::now();
        let stored = self.store.store(&folder, &file_name, bytes).await?;
        tracing::info!(
            target: "yoloset.assets",
            dataset = %name,
            file = %stored.file_name,
            size = stored.size,
            elapsed_ms = started.elapsed().as_millis(),
            "stored upload"
        );
        Ok(stored)
    }

    /// Path of a previously uploaded file.
    ///
    /// Unlike uploads, the requested name must already be a bare file name.
    pub async fn download_path(&self, raw_name: &str, file_name: &str) -> Result<PathBuf, CoreError> {
        let name = self.datasets.verify(raw_name).await?;
        match sanitize_file_name(file_name) {
            Some(clean) if clean == file_name => {
                let folder = self.datasets.layout(&name).join(UPLOADED_IMAGES);
                Ok(self.store.resolve(&folder, &clean).await?)
            }
            _ => Err(AssetError::InvalidFileName(file_name.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::MockPorts;
    use crate::settings::Settings;

    fn service(ports: MockPorts) -> AssetService {
        let ports = ports.into_ports();
        let settings = Arc::new(Settings::default().with_datasets_root("/data/sets"));
        let datasets = DatasetService::new(ports.scaffold, ports.catalog, settings);
        AssetService::new(ports.assets, datasets)
    }

    #[tokio::test]
    async fn upload_strips_client_directories() {
        let mut ports = MockPorts::with_valid_datasets();
        ports
            .assets
            .expect_store()
            .withf(|folder, file_name, bytes| {
                folder.to_str() == Some("/data/sets/cats/uploaded/images")
                    && file_name.to_string() == "cat.jpg"
                    && bytes.len() == 3
            })
            .times(1)
            .returning(|folder, file_name, bytes| {
                Ok(StoredAsset {
                    file_name: file_name.to_string(),
                    path: folder.join(file_name),
                    size: bytes.len() as u64,
                })
            });

        let stored = service(ports)
            .upload("cats", "C:\\Users\\me\\cat.jpg", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(stored.file_name, "cat.jpg");
        assert_eq!(stored.size, 3);
    }

    #[tokio::test]
    async fn upload_rejects_unusable_names() {
        let mut ports = MockPorts::with_valid_datasets();
        ports.assets.expect_store().never();

        let err = service(ports).upload("cats", "../", vec![]).await.unwrap_err();
        assert!(matches!(err, CoreError::Asset(AssetError::InvalidFileName(_))));
    }

    #[tokio::test]
    async fn download_refuses_traversal() {
        let mut ports = MockPorts::with_valid_datasets();
        ports.assets.expect_resolve().never();

        let svc = service(ports);
        for name in ["../data.yaml", "a/b.jpg", ".."] {
            let err = svc.download_path("cats", name).await.unwrap_err();
            assert!(matches!(err, CoreError::Asset(AssetError::InvalidFileName(_))), "{name}");
        }
    }

    #[tokio::test]
    async fn download_resolves_in_staging_folder() {
        let mut ports = MockPorts::with_valid_datasets();
        ports
            .assets
            .expect_resolve()
            .returning(|folder, file_name| Ok(folder.join(file_name)));

        let path = service(ports).download_path("cats", "x.png").await.unwrap();
        assert_eq!(path, PathBuf::from("/data/sets/cats/uploaded/images/x.png"));
    }
}
