//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use thiserror::Error;
use yoloset_core::{CatalogError, CoreError, ScaffoldError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Dataset or file does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Dataset already exists.
    #[error("{0}")]
    Conflict(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Conflict(_) => 73, // EX_CANTCREAT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidName(e) => Self::Arguments(e.to_string()),
            CoreError::DatasetNotFound(_) | CoreError::Scaffold(ScaffoldError::NotFound(_)) => {
                Self::NotFound(err.to_string())
            }
            CoreError::Catalog(CatalogError::AlreadyExists(_)) => Self::Conflict(err.to_string()),
            CoreError::Settings(e) => Self::Config(e.to_string()),
            CoreError::Pagination(e) => Self::Config(e.to_string()),
            CoreError::Pager(e) => Self::Io(e.to_string()),
            CoreError::Scaffold(e) => Self::Io(e.to_string()),
            CoreError::Catalog(e) => Self::Io(e.to_string()),
            CoreError::Asset(e) => Self::Io(e.to_string()),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
