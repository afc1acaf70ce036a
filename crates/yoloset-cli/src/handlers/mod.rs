//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that call `AppCore` and format output for the terminal

pub mod browse;
pub mod create;
pub mod list;
pub mod paths;
pub mod verify;
pub mod web;
