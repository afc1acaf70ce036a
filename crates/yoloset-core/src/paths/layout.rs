//! Fixed on-disk layout of a dataset.
//!
//! Every dataset owns the same subtree under `<datasets_root>/<name>/`:
//!
//! ```text
//! dataset/test/images/    dataset/test/labels/
//! dataset/train/images/   dataset/train/labels/
//! dataset/valid/images/   dataset/valid/labels/
//! dataset/data.yaml
//! uploaded/images/        uploaded/labels/
//! versions/
//! models/
//! ```
//!
//! Downstream training tools read `data.yaml` byte for byte, so its content
//! is a constant.

use std::path::{Path, PathBuf};

use crate::domain::DatasetName;

/// Descriptor read by YOLO training tools, relative to the dataset root.
pub const DATA_YAML: &str = "dataset/data.yaml";

/// Staging area for freshly uploaded images.
pub const UPLOADED_IMAGES: &str = "uploaded/images";

/// Staging area for labels of uploaded images.
pub const UPLOADED_LABELS: &str = "uploaded/labels";

/// Training split images.
pub const TRAIN_IMAGES: &str = "dataset/train/images";

/// Initial `data.yaml`: split paths and an empty class list for the user to fill in.
pub const DATA_YAML_CONTENT: &str = "train: ../train/images\n\
val: ../valid/images\n\
test: ../test/images\n\
\n\
nc: 0\n\
names: []\n\
\n";

/// One step of dataset creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep {
    /// Create a directory (and its parents).
    Dir(&'static str),
    /// Write the generated `data.yaml`.
    DataYaml,
}

/// Creation order: split folders, then the descriptor, then the rest.
pub const SCAFFOLD_PLAN: [ScaffoldStep; 11] = [
    ScaffoldStep::Dir("dataset/test/images"),
    ScaffoldStep::Dir("dataset/test/labels"),
    ScaffoldStep::Dir(TRAIN_IMAGES),
    ScaffoldStep::Dir("dataset/train/labels"),
    ScaffoldStep::Dir("dataset/valid/images"),
    ScaffoldStep::Dir("dataset/valid/labels"),
    ScaffoldStep::DataYaml,
    ScaffoldStep::Dir(UPLOADED_IMAGES),
    ScaffoldStep::Dir(UPLOADED_LABELS),
    ScaffoldStep::Dir("versions"),
    ScaffoldStep::Dir("models"),
];

/// A path that must exist for a dataset to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredPath {
    Dir(&'static str),
    File(&'static str),
}

impl RequiredPath {
    pub const fn relative(self) -> &'static str {
        match self {
            Self::Dir(p) | Self::File(p) => p,
        }
    }
}

/// Every path a complete dataset has, in layout order.
pub const REQUIRED_PATHS: [RequiredPath; 11] = [
    RequiredPath::Dir("dataset/test/images"),
    RequiredPath::Dir("dataset/test/labels"),
    RequiredPath::Dir(TRAIN_IMAGES),
    RequiredPath::Dir("dataset/train/labels"),
    RequiredPath::Dir("dataset/valid/images"),
    RequiredPath::Dir("dataset/valid/labels"),
    RequiredPath::File(DATA_YAML),
    RequiredPath::Dir(UPLOADED_IMAGES),
    RequiredPath::Dir(UPLOADED_LABELS),
    RequiredPath::Dir("versions"),
    RequiredPath::Dir("models"),
];

/// Paths of one dataset under a datasets root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    root: PathBuf,
}

impl DatasetLayout {
    pub fn new(datasets_root: &Path, name: &DatasetName) -> Self {
        Self {
            root: datasets_root.join(name.as_str()),
        }
    }

    /// The dataset folder itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a layout-relative path.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn data_yaml(&self) -> PathBuf {
        self.join(DATA_YAML)
    }

    pub fn uploaded_images(&self) -> PathBuf {
        self.join(UPLOADED_IMAGES)
    }

    pub fn train_images(&self) -> PathBuf {
        self.join(TRAIN_IMAGES)
    }
}
