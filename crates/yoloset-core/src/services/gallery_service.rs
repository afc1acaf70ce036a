//! Paginated browsing of a dataset's image folders.

use std::sync::Arc;
use std::time::Instant;

use super::DatasetService;
use crate::domain::{BrowseOutcome, Gallery, GalleryKind};
use crate::pagination::{PaginationState, RequestedPage, parse_requested_page, resolve_redirect, window};
use crate::ports::{CoreError, DirectoryPager};
use crate::settings::Settings;

/// Service for gallery pages.
#[derive(Clone)]
pub struct GalleryService {
    pager: Arc<dyn DirectoryPager>,
    datasets: DatasetService,
    settings: Arc<Settings>,
}

impl GalleryService {
    pub fn new(
        pager: Arc<dyn DirectoryPager>,
        datasets: DatasetService,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            pager,
            datasets,
            settings,
        }
    }

    pub fn items_per_page(&self) -> u64 {
        self.settings.items_per_page
    }

    /// Resolve a browse request into a rendered page or a redirect.
    ///
    /// `page_token` is the raw path segment, if any. The folder is listed
    /// before the page is checked against its size, so a folder modified
    /// between the two steps may yield a page that no longer lines up with
    /// the total.
    pub async fn browse(
        &self,
        raw_name: &str,
        kind: GalleryKind,
        page_token: Option<&str>,
    ) -> Result<BrowseOutcome, CoreError> {
        let name = self.datasets.verify(raw_name).await?;

        let requested = parse_requested_page(page_token);
        let RequestedPage::Page(page) = requested else {
            tracing::debug!(target: "yoloset.pager", dataset = %name, token = ?page_token, "unparsable page, redirecting to first page");
            return Ok(BrowseOutcome::Redirect { page: 1 });
        };
        let page = page.get();
        let per_page = self.settings.items_per_page;

        let folder = self.datasets.layout(&name).join(kind.folder());
        let started = Instant::now();
        let listed = self.pager.list_page(&folder, page, per_page).await?;
        tracing::debug!(
            target: "yoloset.pager",
            dataset = %name,
            gallery = kind.tag(),
            page,
            total_items = listed.total_items,
            elapsed_ms = started.elapsed().as_millis(),
            "listed gallery page"
        );

        if let Some(target) = resolve_redirect(requested, listed.total_items, per_page)? {
            return Ok(BrowseOutcome::Redirect { page: target });
        }

        let pagination = PaginationState::new(page, listed.total_items, per_page)?;
        let window = window(page, listed.total_items, per_page, self.settings.window_size)?;
        Ok(BrowseOutcome::Page(Gallery {
            dataset: name,
            kind,
            entries: listed.entries,
            pagination,
            window,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileEntry;
    use crate::ports::{ListedPage, PagerError};
    use crate::services::test_support::MockPorts;

    fn service(ports: MockPorts) -> GalleryService {
        let ports = ports.into_ports();
        let settings = Arc::new(Settings::default().with_datasets_root("/data/sets"));
        let datasets = DatasetService::new(ports.scaffold, ports.catalog, Arc::clone(&settings));
        GalleryService::new(ports.pager, datasets, settings)
    }

    /// Pager over a virtual folder of `total` entries named `img_<n>.jpg`.
    fn virtual_folder(ports: &mut MockPorts, total: u64) {
        ports.pager.expect_list_page().returning(move |_, page, per_page| {
            let start = (page - 1) * per_page;
            let end = (start + per_page).min(total);
            let entries = (start..end)
                .map(|i| FileEntry::new(format!("img_{i}.jpg")))
                .collect();
            Ok(ListedPage {
                entries,
                total_items: total,
            })
        });
    }

    #[tokio::test]
    async fn invalid_token_redirects_without_listing() {
        let mut ports = MockPorts::with_valid_datasets();
        ports.pager.expect_list_page().never();

        let svc = service(ports);
        for token in [None, Some("abc"), Some(""), Some("0"), Some("-1")] {
            let outcome = svc.browse("cats", GalleryKind::Uploaded, token).await.unwrap();
            assert_eq!(outcome, BrowseOutcome::Redirect { page: 1 }, "token {token:?}");
        }
    }

    #[tokio::test]
    async fn last_partial_page_renders() {
        let mut ports = MockPorts::with_valid_datasets();
        virtual_folder(&mut ports, 45);

        let BrowseOutcome::Page(gallery) = service(ports)
            .browse("cats", GalleryKind::Uploaded, Some("3"))
            .await
            .unwrap()
        else {
            panic!("expected a page");
        };
        assert_eq!(gallery.entries.len(), 5);
        assert_eq!(gallery.pagination.last_page, 3);
        assert_eq!(gallery.pagination.total_items, 45);
        assert_eq!(gallery.window.before, vec![2]);
        assert!(gallery.window.after.is_empty());
    }

    #[tokio::test]
    async fn page_past_end_redirects_to_last_page() {
        let mut ports = MockPorts::with_valid_datasets();
        virtual_folder(&mut ports, 45);

        let outcome = service(ports)
            .browse("cats", GalleryKind::Uploaded, Some("4"))
            .await
            .unwrap();
        assert_eq!(outcome, BrowseOutcome::Redirect { page: 3 });
    }

    #[tokio::test]
    async fn empty_folder_renders_empty_first_page() {
        let mut ports = MockPorts::with_valid_datasets();
        virtual_folder(&mut ports, 0);

        let BrowseOutcome::Page(gallery) = service(ports)
            .browse("cats", GalleryKind::Uploaded, Some("1"))
            .await
            .unwrap()
        else {
            panic!("expected a page");
        };
        assert!(gallery.entries.is_empty());
        assert_eq!(gallery.pagination.total_items, 0);
        assert_eq!(gallery.pagination.last_page, 0);
    }

    #[tokio::test]
    async fn annotated_gallery_lists_training_images() {
        let mut ports = MockPorts::with_valid_datasets();
        ports
            .pager
            .expect_list_page()
            .withf(|folder, page, per_page| {
                folder.to_str() == Some("/data/sets/cats/dataset/train/images")
                    && *page == 1
                    && *per_page == 20
            })
            .times(1)
            .returning(|_, _, _| Ok(ListedPage::default()));

        let outcome = service(ports)
            .browse("cats", GalleryKind::Annotated, Some("1"))
            .await
            .unwrap();
        assert!(matches!(outcome, BrowseOutcome::Page(g) if g.kind == GalleryKind::Annotated));
    }

    #[tokio::test]
    async fn missing_folder_is_reported() {
        let mut ports = MockPorts::with_valid_datasets();
        ports
            .pager
            .expect_list_page()
            .returning(|folder, _, _| Err(PagerError::NotFound(folder.to_path_buf())));

        let err = service(ports)
            .browse("cats", GalleryKind::Uploaded, Some("1"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Pager(PagerError::NotFound(_))));
    }
}
