//! Action log loader.
//!
//! A log is a JSON array of `{ "createdAt": <ms>, "action": { "type": ..., ... } }`
//! entries. Every action goes through [`Action::from_value`] so an unknown
//! tag is reported with its position in the log.

use std::path::Path;

use anyhow::{Context, bail};
use farm_core::{Action, LoggedAction, Timestamp};
use serde::Deserialize;
use serde_json::Value;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    created_at: Timestamp,
    action: Value,
}

/// Loader for action logs.
pub struct ActionLogLoader;

impl ActionLogLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<LoggedAction>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load action log {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<LoggedAction>> {
        let entries: Vec<RawEntry> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse action log JSON: {}", e))?;

        let mut log = Vec::with_capacity(entries.len());
        let mut previous = Timestamp::EPOCH;
        for (index, entry) in entries.into_iter().enumerate() {
            if entry.created_at < previous {
                bail!(
                    "action #{index} was issued at {} before the previous action at {previous}",
                    entry.created_at
                );
            }
            previous = entry.created_at;

            let action = Action::from_value(entry.action)
                .with_context(|| format!("action #{index} is invalid"))?;
            log.push(LoggedAction::new(entry.created_at, action));
        }
        Ok(log)
    }
}
