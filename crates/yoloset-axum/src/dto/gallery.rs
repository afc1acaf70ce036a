//! Gallery page model.

use serde::Serialize;
use yoloset_core::{Gallery, GalleryKind, PageWindow, PaginationState};

use super::dataset_url;

/// One gallery image and where to fetch it.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDto {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationDto {
    pub page: u64,
    pub items_per_page: u64,
    pub total_items: u64,
    pub last_page: u64,
    pub has_previous: bool,
    pub has_next: bool,
    /// Prefix to append a page number to.
    pub url: String,
}

impl PaginationDto {
    fn new(state: PaginationState, url: String) -> Self {
        Self {
            page: state.page,
            items_per_page: state.items_per_page,
            total_items: state.total_items,
            last_page: state.last_page,
            has_previous: state.has_previous(),
            has_next: state.has_next(),
            url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryDto {
    pub dataset: String,
    pub title: String,
    pub tag: &'static str,
    pub entries: Vec<EntryDto>,
    pub pagination: PaginationDto,
    pub window: PageWindow,
}

/// URL of `page` in the `kind` gallery of `dataset`.
pub fn gallery_page_url(dataset: &str, kind: GalleryKind, page: u64) -> String {
    format!("{}{page}", gallery_prefix(dataset, kind))
}

fn gallery_prefix(dataset: &str, kind: GalleryKind) -> String {
    format!("{}/{}/", dataset_url(dataset), kind.route())
}

impl From<Gallery> for GalleryDto {
    fn from(gallery: Gallery) -> Self {
        let dataset = gallery.dataset.as_str();
        let base = dataset_url(dataset);
        let entries = gallery
            .entries
            .into_iter()
            .map(|entry| EntryDto {
                url: format!("{base}/download/{}", urlencoding::encode(entry.name())),
                name: entry.into_name(),
            })
            .collect();

        Self {
            title: format!("{dataset} Images"),
            tag: gallery.kind.tag(),
            entries,
            pagination: PaginationDto::new(gallery.pagination, gallery_prefix(dataset, gallery.kind)),
            window: gallery.window,
            dataset: gallery.dataset.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yoloset_core::{DatasetName, FileEntry, window};

    #[test]
    fn gallery_dto_builds_links() {
        let gallery = Gallery {
            dataset: DatasetName::parse("cats").unwrap(),
            kind: GalleryKind::Annotated,
            entries: vec![FileEntry::new("a b.jpg")],
            pagination: PaginationState::new(2, 45, 20).unwrap(),
            window: window(2, 45, 20, 3).unwrap(),
        };

        let dto = GalleryDto::from(gallery);
        assert_eq!(dto.title, "cats Images");
        assert_eq!(dto.tag, "annotated");
        assert_eq!(dto.entries[0].url, "/dataset/cats/download/a%20b.jpg");
        assert_eq!(dto.pagination.url, "/dataset/cats/images/annotated/");
        assert!(dto.pagination.has_previous && dto.pagination.has_next);
    }

    #[test]
    fn page_urls_per_kind() {
        assert_eq!(gallery_page_url("cats", GalleryKind::Uploaded, 3), "/dataset/cats/uploaded/3");
        assert_eq!(
            gallery_page_url("cats", GalleryKind::Annotated, 1),
            "/dataset/cats/images/annotated/1"
        );
    }
}
