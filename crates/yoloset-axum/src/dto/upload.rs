//! Upload response.

use serde::Serialize;
use yoloset_core::{StoredAsset, format_file_size};

/// Body of a `201 Created` upload response.
#[derive(Debug, Clone, Serialize)]
pub struct UploadDto {
    pub file_name: String,
    pub size: u64,
    pub size_human: String,
}

impl From<StoredAsset> for UploadDto {
    fn from(asset: StoredAsset) -> Self {
        Self {
            size_human: format_file_size(asset.size),
            file_name: asset.file_name,
            size: asset.size,
        }
    }
}
