//! Subcommand definitions.

use clap::Subcommand;

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Web {
        /// Address to bind
        #[arg(long, default_value = yoloset_axum::bootstrap::DEFAULT_HOST)]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value_t = yoloset_axum::bootstrap::DEFAULT_PORT)]
        port: u16,
    },
    /// Create a dataset with the standard folder layout
    Create {
        /// Dataset name
        name: String,
    },
    /// List all datasets
    List,
    /// Show one page of a dataset gallery
    Browse {
        /// Dataset name
        name: String,
        /// Page number (defaults to the first page)
        page: Option<String>,
        /// Browse annotated training images instead of uploads
        #[arg(long)]
        annotated: bool,
    },
    /// Check that a dataset has every required folder and file
    Verify {
        /// Dataset name
        name: String,
    },
    /// Show resolved paths
    Paths,
}
