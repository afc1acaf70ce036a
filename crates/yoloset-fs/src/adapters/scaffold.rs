//! Dataset layout creation and verification on disk.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use yoloset_core::{
    DATA_YAML_CONTENT, DatasetLayout, DatasetName, REQUIRED_PATHS, RequiredPath, SCAFFOLD_PLAN,
    ScaffoldError, ScaffoldStep, WorkspaceScaffold,
};

/// Create the full layout of `name` under `datasets_root`.
///
/// Steps run in [`SCAFFOLD_PLAN`] order. Directory creation is idempotent;
/// the first failing step aborts and nothing already created is removed.
pub fn create_dataset(datasets_root: &Path, name: &DatasetName) -> Result<(), ScaffoldError> {
    let layout = DatasetLayout::new(datasets_root, name);

    for step in SCAFFOLD_PLAN {
        match step {
            ScaffoldStep::Dir(relative) => {
                let path = layout.join(relative);
                fs::create_dir_all(&path).map_err(|e| ScaffoldError::Io {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                tracing::debug!(target: "yoloset.scaffold", path = %path.display(), "created folder");
            }
            ScaffoldStep::DataYaml => {
                let path = layout.data_yaml();
                fs::write(&path, DATA_YAML_CONTENT).map_err(|e| ScaffoldError::Io {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                tracing::debug!(target: "yoloset.scaffold", path = %path.display(), "wrote data.yaml");
            }
        }
    }
    Ok(())
}

/// Check every required path of `name` exists with the right kind.
pub fn verify_dataset(datasets_root: &Path, name: &DatasetName) -> Result<(), ScaffoldError> {
    let layout = DatasetLayout::new(datasets_root, name);
    if !layout.root().is_dir() {
        return Err(ScaffoldError::NotFound(layout.root().to_path_buf()));
    }

    let missing: Vec<String> = REQUIRED_PATHS
        .iter()
        .filter(|required| {
            let path = layout.join(required.relative());
            match required {
                RequiredPath::Dir(_) => !path.is_dir(),
                RequiredPath::File(_) => !path.is_file(),
            }
        })
        .map(|required| required.relative().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ScaffoldError::Incomplete {
            root: layout.root().to_path_buf(),
            missing,
        })
    }
}

/// [`WorkspaceScaffold`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWorkspaceScaffold;

impl FsWorkspaceScaffold {
    pub const fn new() -> Self {
        Self
    }
}

fn join_failed(path: PathBuf) -> impl FnOnce(String) -> ScaffoldError {
    move |reason| ScaffoldError::Io { path, reason }
}

#[async_trait]
impl WorkspaceScaffold for FsWorkspaceScaffold {
    async fn create_dataset(
        &self,
        datasets_root: &Path,
        name: &DatasetName,
    ) -> Result<(), ScaffoldError> {
        let root = datasets_root.to_path_buf();
        let name = name.clone();
        let on_join = join_failed(root.join(name.as_str()));
        crate::blocking::run_blocking(move || create_dataset(&root, &name), on_join).await
    }

    async fn verify_dataset(
        &self,
        datasets_root: &Path,
        name: &DatasetName,
    ) -> Result<(), ScaffoldError> {
        let root = datasets_root.to_path_buf();
        let name = name.clone();
        let on_join = join_failed(root.join(name.as_str()));
        crate::blocking::run_blocking(move || verify_dataset(&root, &name), on_join).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cats() -> DatasetName {
        DatasetName::parse("cats").unwrap()
    }

    #[test]
    fn creation_is_idempotent_for_folders() {
        let temp = tempdir().unwrap();
        create_dataset(temp.path(), &cats()).unwrap();
        create_dataset(temp.path(), &cats()).unwrap();
        verify_dataset(temp.path(), &cats()).unwrap();
    }

    #[test]
    fn missing_dataset_is_not_found() {
        let temp = tempdir().unwrap();
        let err = verify_dataset(temp.path(), &cats()).unwrap_err();
        assert!(matches!(err, ScaffoldError::NotFound(p) if p == temp.path().join("cats")));
    }

    #[test]
    fn incomplete_dataset_lists_every_missing_path() {
        let temp = tempdir().unwrap();
        create_dataset(temp.path(), &cats()).unwrap();
        let root = temp.path().join("cats");
        fs::remove_dir(root.join("versions")).unwrap();
        fs::remove_file(root.join("dataset/data.yaml")).unwrap();

        let err = verify_dataset(temp.path(), &cats()).unwrap_err();
        let ScaffoldError::Incomplete { missing, .. } = &err else {
            panic!("expected Incomplete, got {err:?}");
        };
        assert_eq!(missing, &vec!["dataset/data.yaml", "versions"]);
    }

    #[test]
    fn wrong_kind_counts_as_missing() {
        let temp = tempdir().unwrap();
        create_dataset(temp.path(), &cats()).unwrap();
        let models = temp.path().join("cats/models");
        fs::remove_dir(&models).unwrap();
        fs::write(&models, b"not a folder").unwrap();

        let err = verify_dataset(temp.path(), &cats()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Incomplete { missing, .. } if missing == ["models"]));
    }

    #[test]
    fn blocked_step_aborts_with_its_path() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("cats");
        fs::create_dir_all(root.join("dataset")).unwrap();
        // A file where the `test` folder should go stops the first step.
        fs::write(root.join("dataset/test"), b"").unwrap();

        let err = create_dataset(temp.path(), &cats()).unwrap_err();
        let ScaffoldError::Io { path, .. } = &err else {
            panic!("expected Io, got {err:?}");
        };
        assert_eq!(path, &root.join("dataset/test/images"));
        assert!(!root.join("dataset/data.yaml").exists());
        assert!(!root.join("models").exists());
    }
}
