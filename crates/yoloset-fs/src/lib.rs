//! Filesystem adapters for the yoloset core ports.
//!
//! Each adapter wraps a plain synchronous function (usable on its own from
//! tests and tools) and runs it on tokio's blocking pool when called through
//! the async port.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

pub mod adapters;
pub mod factory;

mod blocking;

// Re-export factory for convenient access
pub use factory::FsFactory;

// Re-export adapter implementations
pub use adapters::{FsAssetStore, FsDatasetCatalog, FsDirectoryPager, FsWorkspaceScaffold};
