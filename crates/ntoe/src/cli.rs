//! Command-line interface for ntoe.

use clap::Parser;
use std::path::PathBuf;

/// ntoe - n x n tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "ntoe")]
#[command(about = "Play n x n tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size used for every game (asked before each game if omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML settings file (ignored if it doesn't exist)
    #[arg(short, long, default_value = "ntoe.toml")]
    pub config: PathBuf,
}
