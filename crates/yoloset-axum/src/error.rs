//! Axum-specific error types and mappings.
//!
//! This module provides the adapter error type and the mapping from
//! `CoreError` to HTTP status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use thiserror::Error;
use yoloset_core::{AssetError, CatalogError, CoreError, PagerError, PaginationError, ScaffoldError};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request body over the configured upload limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Send the browser elsewhere (303 See Other).
    #[error("Redirect to {0}")]
    Redirect(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl HttpError {
    /// Redirect to the index page with `message` shown as an error.
    pub fn index_redirect(message: &str) -> Self {
        Self::Redirect(format!("/?errorMessage={}", urlencoding::encode(message)))
    }

    /// Map an error raised while serving a route scoped to `dataset`.
    ///
    /// A missing or broken dataset, or a folder that cannot be listed, sends
    /// the browser back to the index with the reason. Everything else maps
    /// as usual.
    pub fn for_dataset(dataset: &str, err: CoreError) -> Self {
        match err {
            CoreError::InvalidName(_) | CoreError::DatasetNotFound(_) | CoreError::Scaffold(_) => {
                tracing::debug!(target: "yoloset.http", dataset, error = %err, "dataset unavailable, redirecting to index");
                Self::index_redirect(&err.to_string())
            }
            CoreError::Pager(e) => {
                tracing::warn!(target: "yoloset.http", dataset, error = %e, "cannot list dataset folder");
                Self::index_redirect(&format!("Cannot get files for '{dataset}'"))
            }
            other => other.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Redirect(location) => return Redirect::to(&location).into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidName(e) => Self::BadRequest(e.to_string()),
            CoreError::DatasetNotFound(_) => Self::NotFound(err.to_string()),
            CoreError::Pager(e) => e.into(),
            CoreError::Scaffold(e) => e.into(),
            CoreError::Catalog(e) => e.into(),
            CoreError::Asset(e) => e.into(),
            CoreError::Pagination(e) => e.into(),
            CoreError::Settings(e) => Self::Internal(format!("Config: {e}")),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<PagerError> for HttpError {
    fn from(err: PagerError) -> Self {
        match err {
            PagerError::NotFound(_) => Self::NotFound(err.to_string()),
            PagerError::InvalidPage(_) => Self::BadRequest(err.to_string()),
            PagerError::InvalidConfiguration | PagerError::Io { .. } => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<ScaffoldError> for HttpError {
    fn from(err: ScaffoldError) -> Self {
        match err {
            ScaffoldError::NotFound(_) => Self::NotFound(err.to_string()),
            ScaffoldError::Incomplete { .. } | ScaffoldError::Io { .. } => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => Self::NotFound(err.to_string()),
            CatalogError::AlreadyExists(_) => Self::Conflict(err.to_string()),
            CatalogError::Io { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<AssetError> for HttpError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::InvalidFileName(_) => Self::BadRequest(err.to_string()),
            AssetError::NotFound(_) => Self::NotFound(err.to_string()),
            AssetError::Io { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<PaginationError> for HttpError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::InvalidPage(_) => Self::BadRequest(err.to_string()),
            PaginationError::InvalidConfiguration => Self::Internal(err.to_string()),
        }
    }
}
