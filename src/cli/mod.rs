//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "ff", about = "Fantasy Football Data CLI")]
pub struct FF {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch all Sleeper players.
    ///
    /// Queries the Sleeper `/players/nfl` endpoint and emits the full
    /// player map as JSON, exactly as returned.
    SleeperPlayers {
        /// Output file path; `-` or omitted writes to stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Fetch the DynastyProcess player ID map.
    ///
    /// Downloads the `playerids.csv` file and emits one JSON object per
    /// row, keyed by the CSV header.
    DpPlayerIds {
        /// Output file path; `-` or omitted writes to stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}
