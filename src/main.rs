//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ff_data::{
    cli::{Commands, FF},
    commands::{dp_player_ids::handle_dp_player_ids, sleeper_players::handle_sleeper_players},
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FF::parse();

    match app.command {
        Commands::SleeperPlayers { output } => handle_sleeper_players(output).await?,
        Commands::DpPlayerIds { output } => handle_dp_player_ids(output).await?,
    }

    Ok(())
}
