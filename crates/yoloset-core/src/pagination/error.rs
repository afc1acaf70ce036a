use thiserror::Error;

/// Errors raised by pagination math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page size of zero; dividing by it is never meaningful.
    #[error("Invalid configuration: items per page must be at least 1")]
    InvalidConfiguration,

    /// Page number outside `1..`.
    #[error("Invalid page: {0}")]
    InvalidPage(u64),
}
