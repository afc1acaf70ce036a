//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Command handlers receive the composed `AppCore`
//! and delegate work to it.

use anyhow::Result;
use yoloset_core::services::AppCore;
use yoloset_core::settings::parse_items_per_page;
use yoloset_core::{Settings, ensure_datasets_root};
use yoloset_fs::FsFactory;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI, taken from global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit datasets root (`--datasets-dir`).
    pub datasets_dir: Option<String>,
    /// Page size override (`--items-per-page`).
    pub items_per_page: Option<String>,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            datasets_dir: cli.datasets_dir.clone(),
            items_per_page: cli.items_per_page.clone(),
        }
    }

    /// Resolve settings: flags first, then environment, then defaults.
    pub fn settings(&self) -> Result<Settings, CliError> {
        let items_per_page = self
            .items_per_page
            .as_deref()
            .map(parse_items_per_page)
            .transpose()
            .map_err(|e| CliError::Arguments(e.to_string()))?;
        Settings::from_env_with(self.datasets_dir.as_deref(), items_per_page)
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Access the AppCore.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    pub fn settings(&self) -> &Settings {
        self.app.settings()
    }
}

/// Bootstrap the CLI application.
///
/// Resolves settings, makes sure the datasets root exists, then assembles
/// the `AppCore` over the filesystem ports.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let settings = config.settings()?;
    ensure_datasets_root(&settings.datasets_root)
        .map_err(|e| CliError::Io(e.to_string()))?;

    tracing::debug!(
        target: "yoloset.paths",
        datasets_root = %settings.datasets_root.display(),
        items_per_page = settings.items_per_page,
        "CLI bootstrap resolved settings"
    );

    Ok(CliContext {
        app: FsFactory::build_app_core(settings),
    })
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::Mutex;

    use super::*;
    use yoloset_core::settings::{
        ITEMS_PER_PAGE_ENV, MAX_UPLOAD_BYTES_ENV, STATICS_DIR_ENV, WINDOW_SIZE_ENV,
    };

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets or clears one variable and puts the previous value back on drop.
    struct EnvVarGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl EnvVarGuard {
        #[allow(unsafe_code)]
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let previous = env::var(key).ok();
            unsafe {
                match value {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        #[allow(unsafe_code)]
        fn drop(&mut self) {
            unsafe {
                match &self.previous {
                    Some(value) => env::set_var(self.key, value),
                    None => env::remove_var(self.key),
                }
            }
        }
    }

    /// Clears every setting variable, then applies `overrides`.
    fn isolated_env(overrides: &[(&'static str, &str)]) -> Vec<EnvVarGuard> {
        let mut guards: Vec<EnvVarGuard> = [
            ITEMS_PER_PAGE_ENV,
            WINDOW_SIZE_ENV,
            MAX_UPLOAD_BYTES_ENV,
            STATICS_DIR_ENV,
        ]
        .into_iter()
        .map(|key| EnvVarGuard::new(key, None))
        .collect();
        guards.extend(
            overrides
                .iter()
                .map(|&(key, value)| EnvVarGuard::new(key, Some(value))),
        );
        guards
    }

    #[test]
    fn zero_page_size_flag_is_an_argument_error() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = isolated_env(&[]);
        let config = CliConfig {
            datasets_dir: Some("/tmp/yoloset-cli-test".into()),
            items_per_page: Some("0".into()),
        };
        let err = config.settings().unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn flag_overrides_page_size() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = isolated_env(&[]);
        let config = CliConfig {
            datasets_dir: Some("/tmp/yoloset-cli-test".into()),
            items_per_page: Some("7".into()),
        };
        assert_eq!(config.settings().unwrap().items_per_page, 7);
    }

    #[test]
    fn flag_wins_over_broken_env_page_size() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = isolated_env(&[(ITEMS_PER_PAGE_ENV, "0")]);
        let config = CliConfig {
            datasets_dir: Some("/tmp/yoloset-cli-test".into()),
            items_per_page: Some("5".into()),
        };
        assert_eq!(config.settings().unwrap().items_per_page, 5);

        let without_flag = CliConfig {
            items_per_page: None,
            ..config
        };
        let err = without_flag.settings().unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
