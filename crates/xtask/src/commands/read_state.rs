//! Read and inspect state snapshots
//!
//! Loads a JSON or RON snapshot and displays its contents.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use farm_content::StateLoader;
use farm_core::GameState;

/// Read and inspect a state snapshot
#[derive(Parser)]
pub struct ReadState {
    /// Snapshot file (.json or .ron)
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (balances, buildings, chickens, ledgers)
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl ReadState {
    pub fn execute(self) -> Result<()> {
        if !self.path.exists() {
            anyhow::bail!("State file not found: {}", self.path.display());
        }

        let state = StateLoader::load(&self.path)?;

        println!("{} {}", style("State File:").bold().cyan(), self.path.display());
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&state),
            OutputFormat::Json => print_json(&state)?,
            OutputFormat::Debug => print_debug(&state),
        }

        Ok(())
    }
}

pub(crate) fn print_summary(state: &GameState) {
    println!("{}", style("=== Farm Summary ===").bold().green());
    println!();

    println!("{}", style("Balances:").bold().yellow());
    println!("  Coins: {}", state.coins);
    println!("  Inventory Entries: {}", state.inventory.len());
    for (item, amount) in state.inventory.iter() {
        println!("    {item}: {amount}");
    }
    println!();

    println!("{}", style("Bumpkin:").bold().yellow());
    match &state.bumpkin {
        Some(bumpkin) => {
            println!("  Level {} ({} XP)", bumpkin.level(), bumpkin.experience);
            for (name, amount) in bumpkin.activity.iter() {
                println!("    {name}: {amount}");
            }
        }
        None => println!("  {}", style("none").dim()),
    }
    println!();

    println!("{}", style("Buildings:").bold().yellow());
    for (name, building) in state.buildings.iter() {
        let status = match (building.coordinates, building.removed_at) {
            (Some(at), _) => format!("placed at ({}, {})", at.x, at.y),
            (None, Some(removed_at)) => format!("removed at {removed_at}"),
            (None, None) => "not placed".to_string(),
        };
        println!("  {name} [{}] - {status}", building.id);
    }
    println!();

    println!("{}", style("Chickens:").bold().yellow());
    let brewing = state.chickens.iter().filter(|(_, chicken)| chicken.is_brewing()).count();
    println!("  Total: {} ({} brewing)", state.chickens.len(), brewing);
    println!();

    if !state.boosts_used_at.is_empty() {
        println!("{}", style("Boosts Used:").bold().yellow());
        for (boost, at) in state.boosts_used_at.iter() {
            println!("  {boost}: {at}");
        }
        println!();
    }
}

fn print_json(state: &GameState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_debug(state: &GameState) {
    println!("{:#?}", state);
}
