//! Route definitions and router construction.
//!
//! Page routes render JSON models through the handlers; static assets and
//! the favicon are served straight from the configured statics directory.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Routes scoped to a single dataset.
fn dataset_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/dataset/{name}", get(handlers::dashboard::dashboard))
        .route("/dataset/{name}/", get(handlers::dashboard::dashboard))
        .route("/dataset/{name}/dashboard", get(handlers::dashboard::dashboard))
        .route("/dataset/{name}/images", get(handlers::dashboard::upload_page))
        .route("/dataset/{name}/uploaded", get(handlers::gallery::uploaded_first))
        .route("/dataset/{name}/uploaded/", get(handlers::gallery::uploaded_first))
        .route("/dataset/{name}/uploaded/{page}", get(handlers::gallery::uploaded))
        .route(
            "/dataset/{name}/images/annotated",
            get(handlers::gallery::annotated_first),
        )
        .route(
            "/dataset/{name}/images/annotated/",
            get(handlers::gallery::annotated_first),
        )
        .route(
            "/dataset/{name}/images/annotated/{page}",
            get(handlers::gallery::annotated),
        )
        .route(
            "/dataset/{name}/upload",
            post(handlers::assets::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/dataset/{name}/download/{filename}",
            get(handlers::assets::download),
        )
}

/// Create the main Axum router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{name}`, `{page}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let settings = ctx.settings().clone();
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);
    let favicon = settings.statics_dir.join("img").join("favicon.ico");

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(handlers::index::index))
        .route("/create/dataset", post(handlers::index::create_dataset))
        .merge(dataset_routes(settings.max_upload_bytes))
        .with_state(state)
        .nest_service("/assets", ServeDir::new(&settings.statics_dir))
        .route_service("/favicon.ico", ServeFile::new(favicon))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
