//! State snapshot loader.
//!
//! Snapshots are JSON in production. RON is accepted for hand-written
//! fixtures because it allows comments and trailing commas. RON is decoded
//! into a JSON value first so both formats share one decoding path.

use std::path::Path;

use anyhow::Context;
use farm_core::GameState;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// On-disk encoding of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Ron,
}

impl SnapshotFormat {
    /// Picks the format from the file extension; anything but `.ron` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Self::Ron,
            _ => Self::Json,
        }
    }
}

/// Loader for farm snapshots.
pub struct StateLoader;

impl StateLoader {
    pub fn load(path: &Path) -> LoadResult<GameState> {
        let content = read_file(path)?;
        let format = SnapshotFormat::from_path(path);
        let state = Self::parse(&content, format)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
        debug!(path = %path.display(), ?format, "loaded snapshot");
        Ok(state)
    }

    pub fn parse(content: &str, format: SnapshotFormat) -> LoadResult<GameState> {
        let state = match format {
            SnapshotFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse state JSON: {}", e))?,
            SnapshotFormat::Ron => {
                let value: serde_json::Value = ron::from_str(content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse state RON: {}", e))?;
                serde_json::from_value(value)
                    .map_err(|e| anyhow::anyhow!("Failed to decode state RON: {}", e))?
            }
        };
        Ok(state)
    }

    /// Writes `state` as pretty JSON, the format every consumer reads.
    pub fn save(state: &GameState, path: &Path) -> LoadResult<()> {
        let json = Self::to_json(state)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))
    }

    pub fn to_json(state: &GameState) -> LoadResult<String> {
        serde_json::to_string_pretty(state).context("Failed to serialize state")
    }
}
