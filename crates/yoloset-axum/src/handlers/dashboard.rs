//! Dataset dashboard and upload page.

use axum::extract::{Path, State};
use axum::Json;

use crate::dto::{DashboardDto, UploadPageDto};
use crate::error::HttpError;
use crate::state::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DashboardDto>, HttpError> {
    let dashboard = state
        .core
        .datasets()
        .dashboard(&name)
        .await
        .map_err(|e| HttpError::for_dataset(&name, e))?;
    Ok(Json(dashboard.into()))
}

/// Page with the upload form of a dataset.
pub async fn upload_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<UploadPageDto>, HttpError> {
    let name = state
        .core
        .datasets()
        .verify(&name)
        .await
        .map_err(|e| HttpError::for_dataset(&name, e))?;
    Ok(Json(UploadPageDto::new(name.as_str())))
}
