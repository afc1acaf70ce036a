//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for managing YOLO training datasets.
#[derive(Parser)]
#[command(name = "yoloset")]
#[command(about = "Create, browse and serve YOLO image datasets")]
#[command(version)]
pub struct Cli {
    /// Override the datasets directory for this invocation
    #[arg(long = "datasets-dir", global = true)]
    pub datasets_dir: Option<String>,

    /// Images per gallery page (overrides YOLOSET_ITEMS_PER_PAGE)
    #[arg(long = "items-per-page", global = true)]
    pub items_per_page: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
