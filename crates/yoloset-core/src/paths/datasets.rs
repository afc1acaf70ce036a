//! Datasets root resolution.
//!
//! Provides utilities for resolving the datasets root from explicit paths,
//! environment variables, or the default location.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Default folder holding one sub-folder per dataset.
pub const DEFAULT_DATASETS_ROOT: &str = "/datasets";

/// Environment variable overriding the datasets root.
pub const DATASETS_DIR_ENV: &str = "YOLOSET_DATASETS_DIR";

/// How the datasets root was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetsRootSource {
    /// The user passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from environment variables / `.env`.
    EnvVar,
    /// Fallback default (`/datasets`).
    Default,
}

/// Resolution result for the datasets root.
#[derive(Debug, Clone)]
pub struct DatasetsRootResolution {
    /// The resolved path to the datasets root.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: DatasetsRootSource,
}

/// Resolve the datasets root from an explicit override, env var, or default.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `YOLOSET_DATASETS_DIR` environment variable
/// 3. `/datasets`
pub fn resolve_datasets_root(explicit: Option<&str>) -> Result<DatasetsRootResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(DatasetsRootResolution {
            path: normalize(path_str)?,
            source: DatasetsRootSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(DATASETS_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(DatasetsRootResolution {
                path: normalize(&env_path)?,
                source: DatasetsRootSource::EnvVar,
            });
        }
    }

    Ok(DatasetsRootResolution {
        path: PathBuf::from(DEFAULT_DATASETS_ROOT),
        source: DatasetsRootSource::Default,
    })
}

/// Make a user supplied path absolute against the current directory.
fn normalize(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::Empty);
    }
    let path = PathBuf::from(trimmed);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().map_err(|e| PathError::CurrentDir(e.to_string()))?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn explicit_wins_over_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(DATASETS_DIR_ENV, "/tmp/from-env");

        let resolved = resolve_datasets_root(Some("/tmp/explicit")).unwrap();
        assert_eq!(resolved.source, DatasetsRootSource::Explicit);
        assert_eq!(resolved.path, PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn env_value_is_used() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(DATASETS_DIR_ENV, "/tmp/from-env");

        let resolved = resolve_datasets_root(None).unwrap();
        assert_eq!(resolved.source, DatasetsRootSource::EnvVar);
        assert!(resolved.path.ends_with("from-env"));
    }

    #[test]
    fn blank_env_falls_back_to_default() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(DATASETS_DIR_ENV, "  ");

        let resolved = resolve_datasets_root(None).unwrap();
        assert_eq!(resolved.source, DatasetsRootSource::Default);
        assert_eq!(resolved.path, PathBuf::from(DEFAULT_DATASETS_ROOT));
    }

    #[test]
    fn relative_paths_are_made_absolute() {
        let resolved = resolve_datasets_root(Some("data/sets")).unwrap();
        assert!(resolved.path.is_absolute());
        assert!(resolved.path.ends_with("data/sets"));
    }

    #[test]
    fn empty_explicit_path_is_rejected() {
        assert!(matches!(
            resolve_datasets_root(Some(" ")),
            Err(PathError::Empty)
        ));
    }
}
