//! Image upload and download.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::dto::UploadDto;
use crate::error::HttpError;
use crate::state::AppState;

/// Multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "dataset_image";

fn multipart_error(err: &MultipartError) -> HttpError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        HttpError::PayloadTooLarge(err.body_text())
    } else {
        HttpError::BadRequest(err.body_text())
    }
}

/// Store the `dataset_image` field into the dataset's upload folder.
pub async fn upload(
    State(state): State<AppState>,
    Path(name): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadDto>), HttpError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| multipart_error(&e))? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| multipart_error(&e))?;

        let stored = state
            .core
            .assets()
            .upload(&name, &file_name, bytes.to_vec())
            .await
            .map_err(|e| HttpError::for_dataset(&name, e))?;
        return Ok((StatusCode::CREATED, Json(stored.into())));
    }

    Err(HttpError::BadRequest(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}

/// Stream a stored image back with its content type.
pub async fn download(
    State(state): State<AppState>,
    Path((name, file_name)): Path<(String, String)>,
    request: Request,
) -> Result<Response, HttpError> {
    let path = state
        .core
        .assets()
        .download_path(&name, &file_name)
        .await
        .map_err(|e| HttpError::for_dataset(&name, e))?;

    let response = ServeFile::new(path).oneshot(request).await;
    Ok(match response {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    })
}
