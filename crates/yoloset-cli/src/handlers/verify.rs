//! Verify command handler.

use anyhow::Result;
use yoloset_core::{CoreError, ScaffoldError};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Check a dataset's layout and list anything missing.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    match ctx.app().datasets().verify(name).await {
        Ok(name) => {
            println!("Dataset '{name}' is complete.");
            Ok(())
        }
        Err(CoreError::Scaffold(ScaffoldError::Incomplete { root, missing })) => {
            println!("Dataset at {} is missing:", root.display());
            for path in &missing {
                println!("  {path}");
            }
            Err(CliError::NotFound(format!("{} required path(s) missing", missing.len())).into())
        }
        Err(e) => Err(CliError::from(e).into()),
    }
}
