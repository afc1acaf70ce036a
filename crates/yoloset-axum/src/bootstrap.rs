//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::Result;
use yoloset_core::services::AppCore;
use yoloset_core::{Settings, ensure_datasets_root, validate_settings};
use yoloset_fs::FsFactory;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Resolved application settings.
    pub settings: Settings,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Config listening on `0.0.0.0:8080` with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            settings,
            cors: CorsConfig::default(),
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    pub fn settings(&self) -> &Settings {
        self.core.settings()
    }
}

/// Bootstrap the Axum server with all services.
///
/// Validates settings and makes sure the datasets root exists and is
/// writable before any route can reach it.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let settings = &config.settings;
    validate_settings(settings)?;
    ensure_datasets_root(&settings.datasets_root)?;

    tracing::info!(
        target: "yoloset.paths",
        datasets_root = %settings.datasets_root.display(),
        statics_dir = %settings.statics_dir.display(),
        items_per_page = settings.items_per_page,
        "Axum bootstrap resolved paths"
    );

    let core = Arc::new(FsFactory::build_app_core(settings.clone()));
    Ok(AxumContext { core })
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(target: "yoloset.http", "yoloset web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
