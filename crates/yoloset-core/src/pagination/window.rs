use serde::Serialize;

use super::{PaginationError, compute_last_page};

/// Navigation links shown around the current page.
///
/// Neither side includes the current page, page 1 or the last page; the
/// renderer draws those separately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageWindow {
    /// Pages before the current one, ascending.
    pub before: Vec<u64>,
    /// Pages after the current one, ascending.
    pub after: Vec<u64>,
}

/// Compute the sliding window of page links around `page`.
///
/// `after` holds up to `window_size` pages in `(page, last_page)` nearest to
/// `page`; `before` holds up to `window_size` pages in `(1, page)` nearest to
/// `page`. Both are ascending.
pub fn window(
    page: u64,
    total_items: u64,
    items_per_page: u64,
    window_size: u64,
) -> Result<PageWindow, PaginationError> {
    let last_page = compute_last_page(total_items, items_per_page)?;

    let after = if last_page > page.saturating_add(1) {
        let upper = page.saturating_add(window_size).min(last_page - 1);
        (page + 1..=upper).collect()
    } else {
        Vec::new()
    };

    let before = if page > 2 {
        let lower = page.saturating_sub(window_size).max(2);
        (lower..page).collect()
    } else {
        Vec::new()
    };

    Ok(PageWindow { before, after })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_gets_both_sides() {
        // 200 items / 20 = 10 pages
        let w = window(5, 200, 20, 2).unwrap();
        assert_eq!(w.before, vec![3, 4]);
        assert_eq!(w.after, vec![6, 7]);
    }

    #[test]
    fn window_excludes_boundaries() {
        let w = window(5, 200, 20, 10).unwrap();
        assert_eq!(w.before, vec![2, 3, 4]);
        assert_eq!(w.after, vec![6, 7, 8, 9]);
    }

    #[test]
    fn first_page_has_no_before() {
        let w = window(1, 200, 20, 3).unwrap();
        assert!(w.before.is_empty());
        assert_eq!(w.after, vec![2, 3, 4]);
    }

    #[test]
    fn second_page_has_no_before() {
        let w = window(2, 200, 20, 3).unwrap();
        assert!(w.before.is_empty());
    }

    #[test]
    fn last_page_has_no_after() {
        let w = window(10, 200, 20, 3).unwrap();
        assert_eq!(w.before, vec![7, 8, 9]);
        assert!(w.after.is_empty());
    }

    #[test]
    fn small_listings_have_empty_window() {
        assert_eq!(window(1, 0, 20, 3).unwrap(), PageWindow::default());
        assert_eq!(window(1, 20, 20, 3).unwrap(), PageWindow::default());
        assert_eq!(window(2, 40, 20, 3).unwrap(), PageWindow::default());
    }

    #[test]
    fn zero_window_size_is_empty() {
        assert_eq!(window(5, 200, 20, 0).unwrap(), PageWindow::default());
    }

    #[test]
    fn zero_page_size_fails() {
        assert_eq!(
            window(1, 10, 0, 3),
            Err(PaginationError::InvalidConfiguration)
        );
    }

    #[test]
    fn window_members_are_always_strictly_inside() {
        for total in 0..=120u64 {
            let last = compute_last_page(total, 7).unwrap();
            for page in 1..=last.max(1) {
                let w = window(page, total, 7, 4).unwrap();
                assert!(w.before.len() <= 4 && w.after.len() <= 4);
                assert!(w.before.iter().all(|&p| p > 1 && p < page));
                assert!(w.after.iter().all(|&p| p > page && p < last));
                assert!(w.before.windows(2).all(|p| p[0] < p[1]));
                assert!(w.after.windows(2).all(|p| p[0] < p[1]));
            }
        }
    }
}
