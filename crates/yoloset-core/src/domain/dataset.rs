//! Dataset identity.
//!
//! A dataset is identified by its name, which is also the name of its folder
//! under the datasets root. Names therefore have to be safe to join onto a
//! path: a single, non-empty path component.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest dataset name accepted, in bytes (common filesystem limit).
pub const MAX_DATASET_NAME_LEN: usize = 255;

/// Reasons a dataset name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetNameError {
    #[error("New dataset name is empty")]
    Empty,

    #[error("Dataset name '{0}' is reserved")]
    Reserved(String),

    /// Leading dot: the folder would be hidden from the dataset listing.
    #[error("Dataset name '{0}' cannot start with '.'")]
    Hidden(String),

    #[error("Dataset name contains forbidden character {0:?}")]
    ForbiddenCharacter(char),

    #[error("Dataset name is longer than {MAX_DATASET_NAME_LEN} bytes")]
    TooLong,
}

/// A validated dataset name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetName(String);

impl DatasetName {
    /// Validate a raw name. Surrounding whitespace is trimmed.
    pub fn parse(raw: &str) -> Result<Self, DatasetNameError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DatasetNameError::Empty);
        }
        if name == "." || name == ".." {
            return Err(DatasetNameError::Reserved(name.to_string()));
        }
        if name.starts_with('.') {
            return Err(DatasetNameError::Hidden(name.to_string()));
        }
        if let Some(c) = name.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
            return Err(DatasetNameError::ForbiddenCharacter(c));
        }
        if name.len() > MAX_DATASET_NAME_LEN {
            return Err(DatasetNameError::TooLong);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DatasetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DatasetName {
    type Error = DatasetNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DatasetName> for String {
    fn from(name: DatasetName) -> Self {
        name.0
    }
}

/// Data for a dataset's dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub dataset: DatasetName,
    pub title: String,
}

impl Dashboard {
    pub fn new(dataset: DatasetName) -> Self {
        let title = format!("{dataset} Dashboard");
        Self { dataset, title }
    }
}
