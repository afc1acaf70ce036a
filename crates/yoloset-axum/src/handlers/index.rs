//! Landing page and dataset creation.

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;
use yoloset_core::{CatalogError, CoreError};

use crate::dto::{IndexDto, dataset_url};
use crate::error::HttpError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

/// Form posted by the "new dataset" dialog.
#[derive(Debug, Default, Deserialize)]
pub struct CreateDatasetForm {
    #[serde(default)]
    pub dataset: String,
}

/// List every dataset, echoing back an error banner if one was passed.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Json<IndexDto>, HttpError> {
    let datasets = state.core.datasets().list().await?;
    Ok(Json(IndexDto::new(datasets, query.error_message)))
}

/// Create a dataset and go to its dashboard.
///
/// Rejections re-render the index with the reason instead of a bare error
/// body, so the form can show it next to the input.
pub async fn create_dataset(
    State(state): State<AppState>,
    Form(form): Form<CreateDatasetForm>,
) -> Response {
    let err = match state.core.datasets().create(&form.dataset).await {
        Ok(name) => {
            let location = format!("{}/dashboard", dataset_url(name.as_str()));
            return Redirect::to(&location).into_response();
        }
        Err(err) => err,
    };

    let status = match &err {
        CoreError::InvalidName(_) => StatusCode::BAD_REQUEST,
        CoreError::Catalog(CatalogError::AlreadyExists(_)) => StatusCode::CONFLICT,
        _ => {
            tracing::error!(target: "yoloset.http", dataset = %form.dataset, error = %err, "dataset creation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let datasets = state.core.datasets().list().await.unwrap_or_default();
    (status, Json(IndexDto::new(datasets, Some(err.to_string())))).into_response()
}
