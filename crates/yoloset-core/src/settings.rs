//! Settings domain types and validation.
//!
//! Settings are resolved once at startup (explicit flags, then `YOLOSET_*`
//! environment variables, then defaults) and stay fixed for the lifetime of
//! the process. A page size of zero is rejected here, before any listing can
//! divide by it.

use std::env;
use std::path::PathBuf;

use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_WINDOW_SIZE};
use crate::paths::{DEFAULT_DATASETS_ROOT, PathError, resolve_datasets_root};

/// Environment variable overriding the gallery page size.
pub const ITEMS_PER_PAGE_ENV: &str = "YOLOSET_ITEMS_PER_PAGE";

/// Environment variable overriding the navigation window size.
pub const WINDOW_SIZE_ENV: &str = "YOLOSET_WINDOW_SIZE";

/// Environment variable overriding the statics folder.
pub const STATICS_DIR_ENV: &str = "YOLOSET_STATICS_DIR";

/// Environment variable overriding the upload size limit.
pub const MAX_UPLOAD_BYTES_ENV: &str = "YOLOSET_MAX_UPLOAD_BYTES";

/// Default folder served under `/assets`.
pub const DEFAULT_STATICS_DIR: &str = "web/statics";

/// Default upload limit: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 << 20;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Folder holding one sub-folder per dataset.
    pub datasets_root: PathBuf,

    /// Gallery page size.
    pub items_per_page: u64,

    /// Navigation links shown on each side of the current page.
    pub window_size: u64,

    /// Largest accepted upload body, in bytes.
    pub max_upload_bytes: usize,

    /// Folder served under `/assets`.
    pub statics_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            datasets_root: PathBuf::from(DEFAULT_DATASETS_ROOT),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            window_size: DEFAULT_WINDOW_SIZE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            statics_dir: PathBuf::from(DEFAULT_STATICS_DIR),
        }
    }
}

impl Settings {
    /// Build settings from the environment, with an optional explicit datasets root.
    ///
    /// The result is validated before it is returned.
    pub fn from_env(datasets_root: Option<&str>) -> Result<Self, SettingsError> {
        Self::from_env_with(datasets_root, None)
    }

    /// Like [`Settings::from_env`], with an explicit page size that takes
    /// precedence over `YOLOSET_ITEMS_PER_PAGE`.
    ///
    /// When `items_per_page` is given the variable is not read at all, so a
    /// broken value in the environment cannot mask a valid flag.
    pub fn from_env_with(
        datasets_root: Option<&str>,
        items_per_page: Option<u64>,
    ) -> Result<Self, SettingsError> {
        let mut settings = Self {
            datasets_root: resolve_datasets_root(datasets_root)?.path,
            ..Self::default()
        };

        match (items_per_page, env_value(ITEMS_PER_PAGE_ENV)) {
            (Some(explicit), _) => settings.items_per_page = explicit,
            (None, Some(raw)) => settings.items_per_page = parse_items_per_page(&raw)?,
            (None, None) => {}
        }
        if let Some(raw) = env_value(WINDOW_SIZE_ENV) {
            settings.window_size = raw
                .parse()
                .map_err(|_| SettingsError::InvalidWindowSize(raw.clone()))?;
        }
        if let Some(raw) = env_value(MAX_UPLOAD_BYTES_ENV) {
            settings.max_upload_bytes = raw
                .parse()
                .map_err(|_| SettingsError::InvalidUploadLimit(raw.clone()))?;
        }
        if let Some(raw) = env_value(STATICS_DIR_ENV) {
            settings.statics_dir = PathBuf::from(raw);
        }

        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Override the page size (e.g. from a CLI flag).
    #[must_use]
    pub const fn with_items_per_page(mut self, items_per_page: u64) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Override the datasets root.
    #[must_use]
    pub fn with_datasets_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.datasets_root = root.into();
        self
    }
}

/// Parse a page size the way every adapter accepts it: a positive integer.
pub fn parse_items_per_page(raw: &str) -> Result<u64, SettingsError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(SettingsError::InvalidItemsPerPage(raw.to_string())),
        Ok(n) => Ok(n),
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Settings validation error.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid configuration: items per page must be a positive integer, got '{0}'")]
    InvalidItemsPerPage(String),

    #[error("Invalid configuration: window size must be a non-negative integer, got '{0}'")]
    InvalidWindowSize(String),

    #[error("Invalid configuration: upload limit must be a positive number of bytes, got '{0}'")]
    InvalidUploadLimit(String),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.items_per_page == 0 {
        return Err(SettingsError::InvalidItemsPerPage("0".to_string()));
    }
    if settings.max_upload_bytes == 0 {
        return Err(SettingsError::InvalidUploadLimit("0".to_string()));
    }
    if settings.datasets_root.as_os_str().is_empty() {
        return Err(SettingsError::Path(PathError::Empty));
    }
    Ok(())
}
