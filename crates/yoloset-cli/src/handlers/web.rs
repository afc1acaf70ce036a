//! Web command handler.

use anyhow::Result;
use yoloset_axum::{ServerConfig, start_server};

use crate::bootstrap::CliConfig;

/// Start the HTTP server and block until it stops.
pub async fn execute(config: &CliConfig, host: &str, port: u16) -> Result<()> {
    let settings = config.settings()?;
    let server = ServerConfig::new(settings).with_host(host).with_port(port);

    tracing::info!(target: "yoloset.http", host, port, "starting web server");
    println!("yoloset web server starting on http://{host}:{port}");
    start_server(server).await
}
