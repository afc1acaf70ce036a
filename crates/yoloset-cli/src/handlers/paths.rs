//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;
use yoloset_core::ResolvedPaths;

use crate::bootstrap::CliConfig;

/// Resolve and print every path the server and CLI would use.
pub fn execute(config: &CliConfig) -> Result<()> {
    let settings = config.settings()?;
    let paths = ResolvedPaths::resolve(config.datasets_dir.as_deref(), &settings)?;
    println!("{paths}");
    println!("items_per_page = {}", settings.items_per_page);
    Ok(())
}
