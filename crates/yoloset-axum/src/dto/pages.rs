//! Index, dashboard and upload page models.

use serde::Serialize;
use yoloset_core::Dashboard;

/// Title of the landing page.
pub const INDEX_TITLE: &str = "Yolov8 Vision";

/// Landing page: every dataset plus an optional error banner.
#[derive(Debug, Clone, Serialize)]
pub struct IndexDto {
    pub title: String,
    pub datasets: Vec<String>,
    pub error_message: Option<String>,
}

impl IndexDto {
    pub fn new(datasets: Vec<String>, error_message: Option<String>) -> Self {
        Self {
            title: INDEX_TITLE.to_string(),
            datasets,
            error_message: error_message.filter(|m| !m.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardDto {
    pub dataset: String,
    pub title: String,
}

impl From<Dashboard> for DashboardDto {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            dataset: dashboard.dataset.into(),
            title: dashboard.title,
        }
    }
}

/// Page holding the upload form of a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct UploadPageDto {
    pub dataset: String,
    pub title: String,
    pub tag: &'static str,
    pub upload_url: String,
}

impl UploadPageDto {
    pub fn new(dataset: &str) -> Self {
        Self {
            dataset: dataset.to_string(),
            title: format!("{dataset} Images"),
            tag: "upload",
            upload_url: format!("{}/upload", super::dataset_url(dataset)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_message_is_dropped() {
        let dto = IndexDto::new(vec![], Some(String::new()));
        assert_eq!(dto.error_message, None);
        assert_eq!(dto.title, "Yolov8 Vision");
    }

    #[test]
    fn upload_page_points_at_upload_route() {
        let dto = UploadPageDto::new("my set");
        assert_eq!(dto.title, "my set Images");
        assert_eq!(dto.upload_url, "/dataset/my%20set/upload");
    }
}
