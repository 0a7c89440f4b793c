//! Command-line interface for term-snake.

use std::path::PathBuf;

use clap::Parser;

/// Snake in the terminal: arrow keys to steer, Enter to quit
#[derive(Parser, Debug)]
#[command(name = "term-snake")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed for food placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file; verbosity follows RUST_LOG (default: info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
