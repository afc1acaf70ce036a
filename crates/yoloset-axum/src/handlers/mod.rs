//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for one area of the site.
//! Handlers are thin wrappers that delegate to the `AppCore` services.

pub mod assets;
pub mod dashboard;
pub mod gallery;
pub mod index;
