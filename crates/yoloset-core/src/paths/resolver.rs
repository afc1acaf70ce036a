//! Pure path resolver for CLI introspection.
//!
//! Captures every resolved location in one struct so `yoloset paths` and the
//! server bootstrap report exactly the same values.

use std::path::PathBuf;

use super::{DatasetsRootSource, PathError, resolve_datasets_root};
use crate::settings::Settings;

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Folder holding one sub-folder per dataset
    pub datasets_root: PathBuf,
    /// How the datasets root was resolved
    pub datasets_source: DatasetsRootSource,
    /// Folder served under `/assets`
    pub statics_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve with an optional explicit datasets root override.
    pub fn resolve(datasets_root: Option<&str>, settings: &Settings) -> Result<Self, PathError> {
        let resolution = resolve_datasets_root(datasets_root)?;
        Ok(Self {
            datasets_root: resolution.path,
            datasets_source: resolution.source,
            statics_dir: settings.statics_dir.clone(),
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "datasets_root = {}", self.datasets_root.display())?;
        writeln!(f, "datasets_source = {:?}", self.datasets_source)?;
        write!(f, "statics_dir = {}", self.statics_dir.display())
    }
}
