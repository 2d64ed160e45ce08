//! Content factory for loading a farm fixture directory.

use std::path::{Path, PathBuf};

use farm_core::{GameState, LoggedAction};

use crate::loaders::{ActionLogLoader, ConfigLoader, EngineConfig, LoadResult, StateLoader};

/// Loads everything needed to replay a farm from one directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml     (optional)
/// ├── state.json      (or state.ron)
/// └── actions.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load engine configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the initial snapshot from `state.json`, falling back to `state.ron`.
    pub fn load_state(&self) -> LoadResult<GameState> {
        let json = self.data_dir.join("state.json");
        let path = if json.exists() {
            json
        } else {
            self.data_dir.join("state.ron")
        };
        StateLoader::load(&path)
    }

    /// Load the action log from `actions.json`.
    pub fn load_actions(&self) -> LoadResult<Vec<LoggedAction>> {
        ActionLogLoader::load(&self.data_dir.join("actions.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_core::{Decimal, FeatureFlags, ItemName, replay};

    #[test]
    fn replays_a_fixture_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("state.ron"),
            r#"(
                coins: "0",
                inventory: { "Pearl": "2" },
                bumpkin: Some(( experience: "0" )),
            )"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("actions.json"),
            r#"[{ "createdAt": 9, "action": { "type": "treasure.sold", "item": "Pearl", "amount": 2 } }]"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().unwrap();
        assert_eq!(config.features.flags(), FeatureFlags::empty());

        let state = factory.load_state().unwrap();
        let log = factory.load_actions().unwrap();
        let next = replay(&state, &log, config.features.flags()).unwrap();

        assert_eq!(next.coins, Decimal::from(6_000));
        assert_eq!(next.inventory.count(ItemName::Pearl), Decimal::ZERO);
    }
}
