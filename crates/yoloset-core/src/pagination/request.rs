use std::num::NonZeroU64;

use super::{PaginationError, compute_last_page};

/// A page number as requested by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedPage {
    Page(NonZeroU64),
    /// Missing or unparsable token. Callers redirect to page 1, never treat
    /// this as page 0.
    Invalid,
}

impl RequestedPage {
    pub const fn get(self) -> Option<u64> {
        match self {
            Self::Page(page) => Some(page.get()),
            Self::Invalid => None,
        }
    }
}

/// Parse a page token taken from a request path.
///
/// Only positive base-10 integers are accepted. Missing, empty, signed,
/// zero, non-numeric and overflowing tokens all become
/// [`RequestedPage::Invalid`].
pub fn parse_requested_page(token: Option<&str>) -> RequestedPage {
    let Some(token) = token.map(str::trim) else {
        return RequestedPage::Invalid;
    };
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return RequestedPage::Invalid;
    }
    token
        .parse::<u64>()
        .ok()
        .and_then(NonZeroU64::new)
        .map_or(RequestedPage::Invalid, RequestedPage::Page)
}

/// Decide whether a request must be redirected before rendering.
///
/// Returns the page to redirect to, or `None` when `requested` can be shown
/// as is. Invalid tokens go to page 1; pages past the end go to the last
/// page, or page 1 when the listing is empty.
pub fn resolve_redirect(
    requested: RequestedPage,
    total_items: u64,
    items_per_page: u64,
) -> Result<Option<u64>, PaginationError> {
    let last_page = compute_last_page(total_items, items_per_page)?;
    let Some(page) = requested.get() else {
        return Ok(Some(1));
    };
    if page == 1 || page <= last_page {
        Ok(None)
    } else {
        Ok(Some(last_page.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u64) -> RequestedPage {
        RequestedPage::Page(NonZeroU64::new(n).unwrap())
    }

    #[test]
    fn parses_positive_integers() {
        assert_eq!(parse_requested_page(Some("1")), page(1));
        assert_eq!(parse_requested_page(Some("42")), page(42));
        assert_eq!(parse_requested_page(Some(" 7 ")), page(7));
        assert_eq!(parse_requested_page(Some("007")), page(7));
    }

    #[test]
    fn garbage_tokens_are_invalid() {
        for token in ["abc", "", " ", "1.5", "-1", "+3", "0", "00", "3a", "99999999999999999999999"] {
            assert_eq!(
                parse_requested_page(Some(token)),
                RequestedPage::Invalid,
                "token {token:?}"
            );
        }
        assert_eq!(parse_requested_page(None), RequestedPage::Invalid);
    }

    #[test]
    fn invalid_token_redirects_to_first_page() {
        assert_eq!(resolve_redirect(RequestedPage::Invalid, 45, 20), Ok(Some(1)));
        assert_eq!(
            resolve_redirect(parse_requested_page(Some("abc")), 45, 20),
            Ok(Some(1))
        );
    }

    #[test]
    fn in_range_pages_are_not_redirected() {
        assert_eq!(resolve_redirect(page(1), 45, 20), Ok(None));
        assert_eq!(resolve_redirect(page(3), 45, 20), Ok(None));
    }

    #[test]
    fn past_the_end_redirects_to_last_page() {
        assert_eq!(resolve_redirect(page(4), 45, 20), Ok(Some(3)));
        assert_eq!(resolve_redirect(page(1000), 45, 20), Ok(Some(3)));
    }

    #[test]
    fn empty_listing_keeps_first_page() {
        assert_eq!(resolve_redirect(page(1), 0, 20), Ok(None));
        assert_eq!(resolve_redirect(page(2), 0, 20), Ok(Some(1)));
    }

    #[test]
    fn zero_page_size_fails() {
        assert_eq!(
            resolve_redirect(page(1), 10, 0),
            Err(PaginationError::InvalidConfiguration)
        );
    }
}
