//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "players-selection",
    about = "Manage players and their scores from an interactive menu"
)]
pub struct Args {
    /// JSON file with `url`, `username` and `password`
    /// (defaults to `<config dir>/players-selection/config.json`).
    /// `PLAYERS_DB_URL`, `PLAYERS_DB_USERNAME` and `PLAYERS_DB_PASSWORD` override it.
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Log store operations to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}
