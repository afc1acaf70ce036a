use serde::Serialize;

use super::PaginationError;

/// Number of pages needed to show `total_items` at `items_per_page` per page.
///
/// Returns `0` for an empty listing. A page size of zero fails with
/// [`PaginationError::InvalidConfiguration`].
pub const fn compute_last_page(total_items: u64, items_per_page: u64) -> Result<u64, PaginationError> {
    if items_per_page == 0 {
        return Err(PaginationError::InvalidConfiguration);
    }
    let full = total_items / items_per_page;
    if total_items % items_per_page == 0 {
        Ok(full)
    } else {
        Ok(full + 1)
    }
}

/// Where a page number falls relative to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCheck {
    InRange,
    /// Page `0`.
    BeforeFirst,
    AfterLast { last_page: u64 },
}

/// Pagination metadata for one rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page: u64,
    pub items_per_page: u64,
    pub total_items: u64,
    pub last_page: u64,
}

impl PaginationState {
    pub const fn new(
        page: u64,
        total_items: u64,
        items_per_page: u64,
    ) -> Result<Self, PaginationError> {
        let last_page = match compute_last_page(total_items, items_per_page) {
            Ok(last) => last,
            Err(e) => return Err(e),
        };
        Ok(Self {
            page,
            items_per_page,
            total_items,
            last_page,
        })
    }

    /// Classify `page` against this listing's bounds.
    ///
    /// Page 1 of an empty listing is in range: it renders as an empty gallery.
    pub const fn check(&self, page: u64) -> PageCheck {
        if page == 0 {
            PageCheck::BeforeFirst
        } else if page == 1 || page <= self.last_page {
            PageCheck::InRange
        } else {
            PageCheck::AfterLast {
                last_page: self.last_page,
            }
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self.check(self.page), PageCheck::InRange)
    }

    /// Index of the first item on the current page, `(page - 1) * items_per_page`.
    pub const fn start_index(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.items_per_page)
    }

    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub const fn has_next(&self) -> bool {
        self.page < self.last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(compute_last_page(45, 20), Ok(3));
        assert_eq!(compute_last_page(41, 20), Ok(3));
        assert_eq!(compute_last_page(1, 20), Ok(1));
    }

    #[test]
    fn last_page_exact_division() {
        assert_eq!(compute_last_page(40, 20), Ok(2));
        assert_eq!(compute_last_page(20, 20), Ok(1));
    }

    #[test]
    fn last_page_of_empty_listing_is_zero() {
        assert_eq!(compute_last_page(0, 20), Ok(0));
    }

    #[test]
    fn zero_page_size_fails_fast() {
        assert_eq!(
            compute_last_page(10, 0),
            Err(PaginationError::InvalidConfiguration)
        );
        assert_eq!(
            PaginationState::new(1, 10, 0),
            Err(PaginationError::InvalidConfiguration)
        );
    }

    #[test]
    fn last_page_bounds_hold() {
        for per_page in 1..=25u64 {
            for total in 0..=200u64 {
                let last = compute_last_page(total, per_page).unwrap();
                assert!(last * per_page >= total, "total={total} per={per_page}");
                if total == 0 {
                    assert_eq!(last, 0);
                } else {
                    assert!((last - 1) * per_page < total, "total={total} per={per_page}");
                }
            }
        }
    }

    #[test]
    fn check_classifies_pages() {
        let state = PaginationState::new(2, 45, 20).unwrap();
        assert_eq!(state.last_page, 3);
        assert_eq!(state.check(0), PageCheck::BeforeFirst);
        assert_eq!(state.check(1), PageCheck::InRange);
        assert_eq!(state.check(3), PageCheck::InRange);
        assert_eq!(state.check(4), PageCheck::AfterLast { last_page: 3 });
        assert!(state.is_valid());
    }

    #[test]
    fn first_page_of_empty_listing_is_valid() {
        let state = PaginationState::new(1, 0, 20).unwrap();
        assert!(state.is_valid());
        assert_eq!(state.check(2), PageCheck::AfterLast { last_page: 0 });
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn start_index_matches_page() {
        let state = PaginationState::new(3, 45, 20).unwrap();
        assert_eq!(state.start_index(), 40);
        assert!(state.has_previous());
        assert!(!state.has_next());
    }
}
