//! Pagination math for directory galleries.
//!
//! Everything here is pure: page bounds, the sliding window of navigation
//! links and page-token parsing are derived from plain integers so they can
//! be tested without a filesystem or a rendering engine.
//!
//! Pages are 1-based. `last_page` is `ceil(total_items / items_per_page)`,
//! which is `0` for an empty listing.

mod error;
mod request;
mod state;
mod window;

pub use error::PaginationError;
pub use request::{RequestedPage, parse_requested_page, resolve_redirect};
pub use state::{PageCheck, PaginationState, compute_last_page};
pub use window::{PageWindow, window};

/// Gallery page size used when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 20;

/// Number of navigation links shown on each side of the current page.
pub const DEFAULT_WINDOW_SIZE: u64 = 3;
