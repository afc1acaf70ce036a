//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print every dataset under the datasets root.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let names = ctx.app().datasets().list().await.map_err(CliError::from)?;

    if names.is_empty() {
        println!(
            "No datasets found in {}.",
            ctx.settings().datasets_root.display()
        );
        println!("Use 'yoloset create <name>' to add your first dataset.");
        return Ok(());
    }

    println!("Found {} dataset(s):\n", names.len());
    for name in names {
        println!("  {name}");
    }
    Ok(())
}
