//! Create command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Create a dataset and print where it lives.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let datasets = ctx.app().datasets();
    let name = datasets.create(name).await.map_err(CliError::from)?;
    println!(
        "Created dataset '{name}' at {}",
        datasets.dataset_root(&name).display()
    );
    Ok(())
}
