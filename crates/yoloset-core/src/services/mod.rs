//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and the pure domain and pagination
//! logic. They never touch the filesystem directly and know nothing about
//! the concrete adapters behind the ports.

mod app_core;
mod asset_service;
mod dataset_service;
mod gallery_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_core::AppCore;
pub use asset_service::AssetService;
pub use dataset_service::DatasetService;
pub use gallery_service::GalleryService;
