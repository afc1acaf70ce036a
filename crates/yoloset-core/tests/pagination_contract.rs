//! Cross-checks of the public pagination API.
//!
//! These exercise `compute_last_page`, `resolve_redirect`, `PaginationState`
//! and `window` together the way the gallery service chains them.

use yoloset_core::{
    PageCheck, PaginationError, PaginationState, RequestedPage, compute_last_page,
    parse_requested_page, resolve_redirect, window,
};

#[test]
fn last_page_bounds_hold_for_all_sizes() {
    for per_page in 1..=25u64 {
        for total in 0..=200u64 {
            let last = compute_last_page(total, per_page).unwrap();
            assert!(last * per_page >= total, "total={total} per_page={per_page}");
            if total > 0 {
                assert!((last - 1) * per_page < total, "total={total} per_page={per_page}");
            } else {
                assert_eq!(last, 0);
            }
        }
    }
}

#[test]
fn zero_page_size_is_rejected_everywhere() {
    assert_eq!(compute_last_page(5, 0), Err(PaginationError::InvalidConfiguration));
    assert_eq!(
        PaginationState::new(1, 5, 0),
        Err(PaginationError::InvalidConfiguration)
    );
    assert_eq!(window(1, 5, 0, 3), Err(PaginationError::InvalidConfiguration));
    assert_eq!(
        resolve_redirect(RequestedPage::Invalid, 5, 0),
        Err(PaginationError::InvalidConfiguration)
    );
}

#[test]
fn forty_five_items_at_twenty_per_page() {
    let state = PaginationState::new(3, 45, 20).unwrap();
    assert_eq!(state.last_page, 3);
    assert_eq!(state.start_index(), 40);
    assert!(state.is_valid());
    assert!(state.has_previous());
    assert!(!state.has_next());
    assert_eq!(state.check(4), PageCheck::AfterLast { last_page: 3 });
    assert_eq!(state.check(0), PageCheck::BeforeFirst);
}

#[test]
fn redirect_target_is_always_renderable() {
    for total in 0..=90u64 {
        for raw in ["abc", "", "1", "2", "3", "5", "100"] {
            let requested = parse_requested_page(Some(raw));
            let target = match resolve_redirect(requested, total, 20).unwrap() {
                Some(target) => target,
                None => requested.get().unwrap(),
            };
            let state = PaginationState::new(target, total, 20).unwrap();
            assert!(state.is_valid(), "total={total} raw={raw:?} target={target}");
            assert_eq!(resolve_redirect(RequestedPage::Page(target.try_into().unwrap()), total, 20), Ok(None));
        }
    }
}
