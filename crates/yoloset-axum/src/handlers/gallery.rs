//! Paginated galleries of uploaded and annotated images.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use yoloset_core::{BrowseOutcome, GalleryKind};

use crate::dto::GalleryDto;
use crate::dto::gallery::gallery_page_url;
use crate::error::HttpError;
use crate::state::AppState;

async fn browse(
    state: &AppState,
    name: &str,
    kind: GalleryKind,
    page: Option<&str>,
) -> Result<Response, HttpError> {
    let outcome = state
        .core
        .galleries()
        .browse(name, kind, page)
        .await
        .map_err(|e| HttpError::for_dataset(name, e))?;

    Ok(match outcome {
        BrowseOutcome::Page(gallery) => Json(GalleryDto::from(gallery)).into_response(),
        BrowseOutcome::Redirect { page } => {
            Redirect::to(&gallery_page_url(name, kind, page)).into_response()
        }
    })
}

/// `/dataset/{name}/uploaded` without a page number.
pub async fn uploaded_first(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, HttpError> {
    browse(&state, &name, GalleryKind::Uploaded, None).await
}

pub async fn uploaded(
    State(state): State<AppState>,
    Path((name, page)): Path<(String, String)>,
) -> Result<Response, HttpError> {
    browse(&state, &name, GalleryKind::Uploaded, Some(&page)).await
}

/// `/dataset/{name}/images/annotated` without a page number.
pub async fn annotated_first(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, HttpError> {
    browse(&state, &name, GalleryKind::Annotated, None).await
}

pub async fn annotated(
    State(state): State<AppState>,
    Path((name, page)): Path<(String, String)>,
) -> Result<Response, HttpError> {
    browse(&state, &name, GalleryKind::Annotated, Some(&page)).await
}
