//! Read and inspect action logs
//!
//! Decodes a JSON action log and displays its contents.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::collections::BTreeMap;
use std::path::PathBuf;

use farm_content::ActionLogLoader;
use farm_core::{ActionKind, LoggedAction};

/// Read and inspect an action log
#[derive(Parser)]
pub struct ReadActions {
    /// Action log file
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Limit number of actions to display (0 = unlimited)
    #[arg(short, long, default_value = "100")]
    limit: usize,

    /// Skip first N actions
    #[arg(long, default_value = "0")]
    skip: usize,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (action types and counts)
    Summary,
    /// List all actions
    List,
    /// Full JSON output
    Json,
}

impl ReadActions {
    pub fn execute(self) -> Result<()> {
        let log = ActionLogLoader::load(&self.path)?;

        println!("{} {}", style("Action Log:").bold().cyan(), self.path.display());
        println!("{} {}", style("Total Actions:").bold().cyan(), log.len());
        println!();

        let limit = if self.limit == 0 { usize::MAX } else { self.limit };
        let window: Vec<_> = log.iter().skip(self.skip).take(limit).collect();

        match self.format {
            OutputFormat::Summary => print_summary(&log),
            OutputFormat::List => print_list(&window, self.skip),
            OutputFormat::Json => print_json(&window)?,
        }

        Ok(())
    }
}

fn print_summary(log: &[LoggedAction]) {
    println!("{}", style("=== Action Summary ===").bold().green());
    println!();

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for entry in log {
        *counts.entry(entry.action.kind().tag()).or_default() += 1;
    }

    println!("{}", style("Action Types:").bold().yellow());
    for (tag, count) in &counts {
        println!("  {tag}: {count}");
    }
    println!();

    if let (Some(first), Some(last)) = (log.first(), log.last()) {
        println!("{}", style("Time Range:").bold().yellow());
        println!("  {} .. {}", first.created_at, last.created_at);
        println!();
    }
}

fn print_list(window: &[&LoggedAction], offset: usize) {
    for (index, entry) in window.iter().enumerate() {
        let kind: ActionKind = entry.action.kind();
        println!(
            "{:>6} {} {} {:?}",
            style(format!("#{}", offset + index)).dim(),
            entry.created_at,
            style(kind).bold(),
            entry.action
        );
    }
}

fn print_json(window: &[&LoggedAction]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(window).context("Failed to serialize actions to JSON")?;
    println!("{}", json);
    Ok(())
}
