//! Content loaders for reading farm data from files.

pub mod actions;
pub mod config;
pub mod factory;
pub mod state;

pub use actions::ActionLogLoader;
pub use config::{ConfigLoader, EngineConfig, FeatureConfig};
pub use factory::ContentFactory;
pub use state::{SnapshotFormat, StateLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
