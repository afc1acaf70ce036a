//! Mock port wiring for service tests.

use std::sync::Arc;

use crate::ports::asset_store::MockAssetStore;
use crate::ports::dataset_catalog::MockDatasetCatalog;
use crate::ports::directory_pager::MockDirectoryPager;
use crate::ports::workspace_scaffold::MockWorkspaceScaffold;
use crate::ports::Ports;

/// One mock per port. Set expectations, then convert with [`MockPorts::into_ports`].
#[derive(Default)]
pub struct MockPorts {
    pub pager: MockDirectoryPager,
    pub scaffold: MockWorkspaceScaffold,
    pub catalog: MockDatasetCatalog,
    pub assets: MockAssetStore,
}

impl MockPorts {
    /// Scaffold that accepts every dataset as complete.
    pub fn with_valid_datasets() -> Self {
        let mut ports = Self::default();
        ports
            .scaffold
            .expect_verify_dataset()
            .returning(|_, _| Ok(()));
        ports
    }

    pub fn into_ports(self) -> Ports {
        Ports::new(
            Arc::new(self.pager),
            Arc::new(self.scaffold),
            Arc::new(self.catalog),
            Arc::new(self.assets),
        )
    }
}
