//! Path utilities for the datasets root and the per-dataset layout.
//!
//! This module provides the canonical path resolution for all yoloset components:
//! - The datasets root (explicit flag, environment, default)
//! - The fixed on-disk layout of a single dataset
//! - The generated `data.yaml` descriptor
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Layout knowledge lives here; `yoloset-fs` only performs the I/O
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod datasets;
mod ensure;
mod error;
mod layout;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Datasets root
pub use datasets::{
    DATASETS_DIR_ENV, DEFAULT_DATASETS_ROOT, DatasetsRootResolution, DatasetsRootSource,
    resolve_datasets_root,
};

// Dataset layout
pub use layout::{
    DATA_YAML, DATA_YAML_CONTENT, DatasetLayout, REQUIRED_PATHS, RequiredPath, SCAFFOLD_PLAN,
    ScaffoldStep, TRAIN_IMAGES, UPLOADED_IMAGES, UPLOADED_LABELS,
};

// Directory operations
pub use ensure::ensure_datasets_root;

// Pure resolver for CLI introspection
pub use resolver::ResolvedPaths;
