//! Errors raised while resolving or preparing the datasets root.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Datasets root cannot be empty")]
    Empty,

    /// A relative root could not be anchored to the working directory.
    #[error("Cannot resolve relative datasets root: {0}")]
    CurrentDir(String),

    #[error("Datasets root {0} is a file, not a folder")]
    NotAFolder(PathBuf),

    #[error("Cannot create datasets root {path}: {reason}")]
    Create { path: PathBuf, reason: String },

    #[error("Datasets root {path} is read-only: {reason}")]
    ReadOnly { path: PathBuf, reason: String },
}
