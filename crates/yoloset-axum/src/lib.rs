//! Axum HTTP adapter for yoloset.
//!
//! Routes render JSON page models (index, dashboard, galleries), accept
//! dataset creation and image uploads, and serve downloads and static assets.
//! All behavior lives in `yoloset-core`; handlers only translate between HTTP
//! and the `AppCore` services.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; these are used by tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
