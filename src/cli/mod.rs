//! CLI module for pagelink.
//!
//! Usage:
//!   pagelink [INPUT]            # run commands from INPUT, or stdin
//!   pagelink --config cfg.toml  # load settings from a TOML file
//!   pagelink --stats            # JSON run summary on stderr

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::command::RunReport;
use crate::graph::GraphStats;

#[derive(Parser, Debug)]
#[command(name = "pagelink")]
#[command(about = "Page link graph with reachability queries", long_about = HELP_TEXT)]
pub struct Cli {
    /// Command file to read (default: standard input)
    pub inputs: Vec<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print a JSON run summary to stderr when done
    #[arg(long)]
    pub stats: bool,
}

const HELP_TEXT: &str = "Reads one command per line:

  @addPages <name>...            Add pages
  @addLinks <src> <dest>...      Link src to each dest
  @isConnected <from> <to>       Print 1 if <to> is reachable from <from>, else 0

Errors are reported on stderr and processing continues.
Exit status is 1 if any command failed.";

/// Machine-readable summary printed by `--stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub report: RunReport,
    pub graph: GraphStats,
}

impl RunSummary {
    pub fn new(report: RunReport, graph: GraphStats) -> Self {
        Self { report, graph }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
