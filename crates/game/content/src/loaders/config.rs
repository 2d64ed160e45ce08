//! Engine configuration loader.

use std::path::Path;

use farm_core::{FeatureFlags, GameConfig};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Capability switches as written in `config.toml`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureConfig {
    /// Lifts building removal restrictions.
    pub landscaping: bool,
}

impl FeatureConfig {
    pub fn flags(&self) -> FeatureFlags {
        let mut flags = FeatureFlags::empty();
        flags.set(FeatureFlags::LANDSCAPING, self.landscaping);
        flags
    }
}

/// Runtime tunables for the engine.
///
/// ```toml
/// [features]
/// landscaping = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub features: FeatureConfig,
}

impl EngineConfig {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::with_features(self.features.flags())
    }
}

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
