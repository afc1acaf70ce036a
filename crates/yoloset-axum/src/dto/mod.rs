//! Data Transfer Objects (DTOs) for the HTTP contract.
//!
//! These types define the JSON page models with explicit serialization
//! control. They decouple the core domain types from what clients render,
//! and they are the only place URLs are built.

pub mod gallery;
pub mod pages;
pub mod upload;

pub use gallery::{EntryDto, GalleryDto, PaginationDto};
pub use pages::{DashboardDto, INDEX_TITLE, IndexDto, UploadPageDto};
pub use upload::UploadDto;

/// Path prefix of everything scoped to one dataset, with the name encoded.
pub fn dataset_url(dataset: &str) -> String {
    format!("/dataset/{}", urlencoding::encode(dataset))
}
