//! Replay an action log against a snapshot
//!
//! Folds every logged action through the engine and prints or writes the
//! resulting snapshot. The first rejected action stops the replay.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use tracing::debug;

use farm_content::{ActionLogLoader, ConfigLoader, EngineConfig, StateLoader};
use farm_core::{GameError, replay};

use super::read_state::print_summary;

/// Replay an action log against a snapshot
#[derive(Parser)]
pub struct Replay {
    /// Initial snapshot (.json or .ron)
    #[arg(short, long, value_name = "FILE")]
    state: PathBuf,

    /// Action log (JSON array of `{ createdAt, action }`)
    #[arg(short, long, value_name = "FILE")]
    actions: PathBuf,

    /// Engine configuration (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the resulting snapshot here instead of printing it
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Print a summary instead of the full snapshot
    #[arg(long)]
    summary: bool,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => EngineConfig::default(),
        };
        let initial = StateLoader::load(&self.state)?;
        let log = ActionLogLoader::load(&self.actions)?;
        debug!(features = ?config.features.flags(), "replay inputs loaded");

        eprintln!(
            "{} {} actions from {}",
            style("Replaying").bold().cyan(),
            log.len(),
            self.actions.display()
        );

        let state = match replay(&initial, &log, config.features.flags()) {
            Ok(state) => state,
            Err(err) => {
                if let Some(entry) = log.get(err.index) {
                    eprintln!(
                        "{} action #{} ({}) at {}",
                        style("Rejected").bold().red(),
                        err.index,
                        entry.action.kind(),
                        entry.created_at
                    );
                }
                eprintln!("  {}: {}", style(err.error.error_code()).yellow(), err.error);
                return Err(err).context("Replay stopped");
            }
        };

        eprintln!("{} all actions applied", style("OK").bold().green());

        match (&self.out, self.summary) {
            (Some(path), _) => {
                StateLoader::save(&state, path)?;
                eprintln!("{} {}", style("Wrote").bold().cyan(), path.display());
            }
            (None, true) => print_summary(&state),
            (None, false) => println!("{}", StateLoader::to_json(&state)?),
        }

        Ok(())
    }
}
